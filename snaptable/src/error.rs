use thiserror::Error;

/// Observer lifecycle misuse.
#[derive(Debug, Clone, Error)]
pub enum ObserveError {
    /// A live [`ResizeObserver`](crate::adaptive::ResizeObserver) already
    /// exists for this container; drop it before observing again.
    #[error("container '{0}' is already being observed")]
    AlreadyAttached(String),
}
