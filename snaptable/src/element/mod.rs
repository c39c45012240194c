mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::types::Slot;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect all header cells under `root` in document order.
///
/// This is the column sequence the adaptive layout partitions: one entry per
/// column, left to right.
pub fn collect_head_cells(root: &Element) -> Vec<&Element> {
    let mut result = Vec::new();
    collect_slot_recursive(root, Slot::Head, &mut result);
    result
}

/// Collect all elements with the given slot, in document order.
pub fn collect_slot<'a>(root: &'a Element, slot: Slot) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_slot_recursive(root, slot, &mut result);
    result
}

fn collect_slot_recursive<'a>(element: &'a Element, slot: Slot, result: &mut Vec<&'a Element>) {
    if element.slot == slot {
        result.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_slot_recursive(child, slot, result);
        }
    }
}
