//! The adaptive column layout driver.
//!
//! [`AdaptiveLayout`] owns everything that persists between recomputations:
//! the observed container id, the compact flag, the last seen container
//! width, and the computed hints. Every trigger (mount, resize, compact-mode
//! change) re-runs the whole computation from the reset baseline; there is
//! no queuing or debouncing, so rapid successive notifications each produce
//! a full, independent recomputation and the last one wins.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::element::{collect_head_cells, find_element, Element};
use crate::error::ObserveError;
use crate::event::Event;
use crate::layout::{snap_layout, ColumnGroup, ColumnHint, LayoutResult};
use crate::measure::column_widths;

/// Slack added to the measured container width before partitioning.
const WIDTH_SLACK: u16 = 1;

#[derive(Debug, Default)]
struct Inner {
    /// Last container width from a resize notification; `None` until the
    /// first one arrives.
    container_width: Option<u16>,
    compact: bool,
    hints: LayoutResult,
    groups: Vec<ColumnGroup>,
}

/// Stateful driver for the adaptive column layout.
///
/// Cloning shares the same state; the handle is cheap to pass around.
#[derive(Debug)]
pub struct AdaptiveLayout {
    container: String,
    inner: Arc<RwLock<Inner>>,
    dirty: Arc<AtomicBool>,
    attached: Arc<AtomicBool>,
}

impl AdaptiveLayout {
    /// Create a driver for the container element with the given id.
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            inner: Arc::new(RwLock::new(Inner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            attached: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The observed container id.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Attach to the container and run the mount computation.
    ///
    /// The returned [`ResizeObserver`] keeps the subscription alive;
    /// dropping it detaches, after which [`process_events`](Self::process_events)
    /// ignores notifications. Only one live observer is allowed at a time.
    pub fn observe(&self, root: &Element, width: u16) -> Result<ResizeObserver, ObserveError> {
        if self.attached.swap(true, Ordering::SeqCst) {
            return Err(ObserveError::AlreadyAttached(self.container.clone()));
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.container_width = Some(width);
        }
        self.recompute(root);
        log::debug!("[adaptive] observing {} at width {}", self.container, width);
        Ok(ResizeObserver {
            container: self.container.clone(),
            attached: Arc::clone(&self.attached),
        })
    }

    /// Whether a live observer is attached.
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    /// Consume host events. Resize and compact-mode notifications each
    /// trigger a full recomputation; everything is ignored while detached.
    pub fn process_events(&self, events: &[Event], root: &Element) {
        if !self.is_attached() {
            return;
        }
        for event in events {
            match *event {
                Event::Resize { width, .. } => self.on_resize(root, width),
                Event::CompactChanged { compact } => self.set_compact(root, compact),
            }
        }
    }

    /// Resize trigger: record the new container width and recompute.
    pub fn on_resize(&self, root: &Element, width: u16) {
        if let Ok(mut inner) = self.inner.write() {
            inner.container_width = Some(width);
        }
        self.recompute(root);
    }

    /// Compact-mode trigger.
    pub fn set_compact(&self, root: &Element, compact: bool) {
        if let Ok(mut inner) = self.inner.write() {
            inner.compact = compact;
        }
        self.recompute(root);
    }

    pub fn compact(&self) -> bool {
        self.inner.read().map(|inner| inner.compact).unwrap_or(false)
    }

    /// Recompute hints from scratch for the current tree.
    ///
    /// Skips silently when the observed container is not in the tree or no
    /// width has been seen yet; the next trigger retries.
    pub fn recompute(&self, root: &Element) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        let Some(container) = find_element(root, &self.container) else {
            log::trace!("[adaptive] container {} not mounted, skipping", self.container);
            return;
        };
        let heads = collect_head_cells(container);

        // Step 1: reset every column to its declared baseline.
        inner.hints = heads
            .iter()
            .map(|head| (head.id.clone(), ColumnHint::reset(head.min_width)))
            .collect();
        inner.groups.clear();

        if !inner.compact {
            self.dirty.store(true, Ordering::SeqCst);
            return;
        }

        let Some(width) = inner.container_width else {
            log::trace!("[adaptive] no width for {} yet, skipping", self.container);
            return;
        };

        // Steps 2-4: measure, partition, redistribute.
        let available = width.saturating_add(WIDTH_SLACK);
        let widths = column_widths(container);
        let (groups, hints) = snap_layout(&widths, available);
        for (head, hint) in heads.iter().zip(hints) {
            inner.hints.insert(head.id.clone(), hint);
        }
        log::debug!(
            "[adaptive] {}: {} columns -> {} groups at width {}",
            self.container,
            widths.len(),
            groups.len(),
            available
        );
        inner.groups = groups;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Current hint for a header cell, if it was part of the last
    /// computation.
    pub fn hint(&self, id: &str) -> Option<ColumnHint> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.hints.get(id).copied())
    }

    /// All current hints, keyed by header-cell id.
    pub fn hints(&self) -> LayoutResult {
        self.inner
            .read()
            .map(|inner| inner.hints.clone())
            .unwrap_or_default()
    }

    /// The snap page structure from the last computation. Empty outside
    /// compact mode.
    pub fn groups(&self) -> Vec<ColumnGroup> {
        self.inner
            .read()
            .map(|inner| inner.groups.clone())
            .unwrap_or_default()
    }

    /// Check if the layout changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for AdaptiveLayout {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            attached: Arc::clone(&self.attached),
        }
    }
}

/// Live resize subscription. Dropping it detaches the observer.
#[derive(Debug)]
pub struct ResizeObserver {
    container: String,
    attached: Arc<AtomicBool>,
}

impl Drop for ResizeObserver {
    fn drop(&mut self) {
        self.attached.store(false, Ordering::SeqCst);
        log::debug!("[adaptive] detached observer for {}", self.container);
    }
}
