mod edges;
mod slot;

pub use edges::Edges;
pub use slot::Slot;
