//! Structural roles for table elements.
//!
//! Every element carries a [`Slot`]: a stable marker identifying its place in
//! the table structure, used for styling hooks, traversal and automation. The
//! marker and the baseline class set are fixed per slot; user classes are
//! merged on top of the baseline, never replacing it.

/// Structural role of an element in the table tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Scrollable wrapper around the table. Carries the horizontal
    /// scroll/snap configuration in its baseline classes.
    Container,
    Table,
    Header,
    Body,
    Footer,
    Row,
    /// Header cell. The only slot with a declared minimum width.
    Head,
    Cell,
    Caption,
}

impl Slot {
    /// Stable structural marker for this slot.
    pub const fn marker(self) -> &'static str {
        match self {
            Slot::Container => "table-container",
            Slot::Table => "table",
            Slot::Header => "table-header",
            Slot::Body => "table-body",
            Slot::Footer => "table-footer",
            Slot::Row => "table-row",
            Slot::Head => "table-head",
            Slot::Cell => "table-cell",
            Slot::Caption => "table-caption",
        }
    }

    /// Fixed baseline class set applied before any user classes.
    pub const fn baseline_classes(self) -> &'static str {
        match self {
            Slot::Container => "relative w-full overflow-x-auto scroll-smooth snap-x snap-mandatory",
            Slot::Table => "w-full caption-bottom text-sm",
            Slot::Header => "[&_tr]:border-b",
            Slot::Body => "[&_tr:last-child]:border-0",
            Slot::Footer => "bg-muted/50 border-t font-medium [&>tr]:last:border-b-0",
            Slot::Row => "hover:bg-muted/50 data-[state=selected]:bg-muted border-b transition-colors",
            Slot::Head => "text-foreground h-10 px-2 text-left align-middle font-medium whitespace-nowrap",
            Slot::Cell => "p-2 align-middle",
            Slot::Caption => "text-muted-foreground mt-4 text-sm",
        }
    }
}
