pub mod adaptive;
pub mod element;
pub mod error;
pub mod event;
pub mod layout;
pub mod measure;
pub mod types;
pub mod viewport;

pub use adaptive::{AdaptiveLayout, ResizeObserver};
pub use element::{collect_head_cells, collect_slot, find_element, Content, Element};
pub use error::ObserveError;
pub use event::Event;
pub use layout::{partition, redistribute, snap_layout, ColumnGroup, ColumnHint, LayoutResult};
pub use measure::{column_widths, display_width, natural_width};
pub use types::*;
pub use viewport::{is_compact, Viewport, MOBILE_BREAKPOINT};
