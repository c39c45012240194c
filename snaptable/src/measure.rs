//! Headless column measurement.
//!
//! The partitioning step consumes rendered column widths. Without a real
//! renderer the rendered width of a column is modelled as the widest content
//! among its header cell and every body/footer cell sharing its column index,
//! floored at the header cell's declared minimum. This is the width the
//! column shows with only the reset-state hints applied.

use unicode_width::UnicodeWidthStr;

use crate::element::{collect_head_cells, collect_slot, Content, Element};
use crate::types::Slot;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Natural rendered width of a single element: its widest content line plus
/// horizontal padding. Nested children stack, so the widest child wins.
pub fn natural_width(element: &Element) -> u16 {
    let content = match &element.content {
        Content::Text(text) => text
            .lines()
            .map(display_width)
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16,
        Content::Children(children) => children.iter().map(natural_width).max().unwrap_or(0),
        Content::None => 0,
    };
    content.saturating_add(element.padding.horizontal_total())
}

/// Measured width of every column under `root`, in header-cell order.
pub fn column_widths(root: &Element) -> Vec<u16> {
    let heads = collect_head_cells(root);
    let mut widths: Vec<u16> = heads.iter().map(|head| natural_width(head)).collect();

    // Body and footer cells widen their column; cells beyond the header's
    // column count have no column to widen.
    for row in collect_slot(root, Slot::Row) {
        let Content::Children(cells) = &row.content else {
            continue;
        };
        let mut column = 0usize;
        for cell in cells {
            if cell.slot != Slot::Cell {
                continue;
            }
            if let Some(width) = widths.get_mut(column) {
                *width = (*width).max(natural_width(cell));
            }
            column += 1;
        }
    }

    for (width, head) in widths.iter_mut().zip(&heads) {
        if let Some(min) = head.min_width {
            *width = (*width).max(min);
        }
    }

    widths
}
