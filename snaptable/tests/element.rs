use snaptable::{collect_head_cells, collect_slot, find_element, Element, Slot};

fn sample_table() -> Element {
    Element::container().id("wrap").child(
        Element::table()
            .id("grid")
            .child(
                Element::header().child(
                    Element::row().id("head-row").children([
                        Element::head("Name").id("col-name"),
                        Element::head("Email").id("col-email").min_width(24),
                    ]),
                ),
            )
            .child(
                Element::body().children([
                    Element::row()
                        .id("row-1")
                        .children([Element::cell("Ada"), Element::cell("ada@example.com")]),
                    Element::row()
                        .id("row-2")
                        .children([Element::cell("Grace"), Element::cell("grace@example.com")]),
                ]),
            )
            .child(Element::caption("Two people")),
    )
}

// ============================================================================
// Structural Markers
// ============================================================================

#[test]
fn slots_carry_stable_markers() {
    assert_eq!(Element::container().slot.marker(), "table-container");
    assert_eq!(Element::table().slot.marker(), "table");
    assert_eq!(Element::header().slot.marker(), "table-header");
    assert_eq!(Element::body().slot.marker(), "table-body");
    assert_eq!(Element::footer().slot.marker(), "table-footer");
    assert_eq!(Element::row().slot.marker(), "table-row");
    assert_eq!(Element::head("x").slot.marker(), "table-head");
    assert_eq!(Element::cell("x").slot.marker(), "table-cell");
    assert_eq!(Element::caption("x").slot.marker(), "table-caption");
}

#[test]
fn container_baseline_carries_scroll_snap_configuration() {
    let classes = Element::container().class_list();
    assert!(classes.contains("overflow-x-auto"), "horizontal scroll");
    assert!(classes.contains("snap-x"), "snap axis");
    assert!(classes.contains("snap-mandatory"), "snap strictness");
}

#[test]
fn user_classes_merge_after_baseline() {
    let el = Element::table().class("mt-4").class("border");
    let classes = el.class_list();
    assert!(classes.starts_with(Slot::Table.baseline_classes()));
    assert!(classes.ends_with("mt-4 border"));
}

#[test]
fn attributes_pass_through() {
    let el = Element::row().attr("data-state", "selected");
    assert_eq!(el.attrs.get("data-state").map(String::as_str), Some("selected"));
}

#[test]
fn head_cell_carries_declared_minimum() {
    let el = Element::head("Email").min_width(24);
    assert_eq!(el.min_width, Some(24));
    assert_eq!(Element::head("Name").min_width, None, "absent means no minimum");
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn find_element_walks_the_tree() {
    let root = sample_table();
    assert!(find_element(&root, "wrap").is_some());
    assert_eq!(find_element(&root, "col-email").unwrap().min_width, Some(24));
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn head_cells_collect_in_document_order() {
    let root = sample_table();
    let heads = collect_head_cells(&root);
    let ids: Vec<&str> = heads.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["col-name", "col-email"]);
}

#[test]
fn collect_slot_finds_all_rows() {
    let root = sample_table();
    let rows = collect_slot(&root, Slot::Row);
    assert_eq!(rows.len(), 3, "header row plus two body rows");
}
