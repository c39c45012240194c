/// Notifications the host pumps into the adaptive layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Observed container was resized.
    Resize { width: u16, height: u16 },
    /// Viewport classification crossed the compact breakpoint.
    CompactChanged { compact: bool },
}
