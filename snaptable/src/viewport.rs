//! Viewport classification.
//!
//! The adaptive layout takes compact mode as an opaque boolean; this module
//! is the collaborator that derives it from a viewport width so the layout
//! stays pure and independently testable.

/// Width below which a viewport is classified as compact.
pub const MOBILE_BREAKPOINT: u16 = 768;

/// Classify a width against [`MOBILE_BREAKPOINT`].
pub fn is_compact(width: u16) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Tracks the viewport width and reports compact-mode flips.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u16,
    breakpoint: u16,
}

impl Viewport {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            breakpoint: MOBILE_BREAKPOINT,
        }
    }

    pub fn with_breakpoint(width: u16, breakpoint: u16) -> Self {
        Self { width, breakpoint }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn compact(&self) -> bool {
        self.width < self.breakpoint
    }

    /// Record a new width. Returns the new classification only when it
    /// crossed the breakpoint.
    pub fn update(&mut self, width: u16) -> Option<bool> {
        let was = self.compact();
        self.width = width;
        let now = self.compact();
        if now != was {
            log::debug!("[viewport] compact mode {} at width {}", now, width);
            Some(now)
        } else {
            None
        }
    }
}
