mod snap;

pub use snap::{partition, redistribute, snap_layout, ColumnGroup, ColumnHint};

use std::collections::HashMap;

/// Computed sizing hints, keyed by header-cell element id.
pub type LayoutResult = HashMap<String, ColumnHint>;
