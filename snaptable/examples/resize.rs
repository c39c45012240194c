use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use snaptable::{collect_head_cells, AdaptiveLayout, Element, Event, Viewport};

fn ui() -> Element {
    Element::container().id("orders").child(
        Element::table()
            .child(
                Element::header().child(Element::row().children([
                    Element::head("Order").id("col-order").min_width(120),
                    Element::head("Customer").id("col-customer").min_width(200),
                    Element::head("Status").id("col-status").min_width(100),
                    Element::head("Total").id("col-total").min_width(80),
                ])),
            )
            .child(
                Element::body().children([
                    Element::row().children([
                        Element::cell("#1001"),
                        Element::cell("Ada Lovelace"),
                        Element::cell("shipped"),
                        Element::cell("$240.00"),
                    ]),
                    Element::row().children([
                        Element::cell("#1002"),
                        Element::cell("Grace Hopper"),
                        Element::cell("pending"),
                        Element::cell("$1,024.00"),
                    ]),
                ]),
            )
            .child(Element::caption("Recent orders")),
    )
}

fn main() {
    // Set up file logging
    let log_file = File::create("resize.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = ui();
    let layout = AdaptiveLayout::new("orders");
    let mut viewport = Viewport::new(1024);
    let _observer = layout
        .observe(&root, viewport.width())
        .expect("Failed to observe container");

    for width in [1024, 700, 360, 900] {
        let mut events = vec![Event::Resize { width, height: 768 }];
        if let Some(compact) = viewport.update(width) {
            events.push(Event::CompactChanged { compact });
        }
        layout.process_events(&events, &root);

        println!("width {width} (compact: {}):", viewport.compact());
        for group in layout.groups() {
            println!("  page {}..={}", group.start, group.end);
        }
        for head in collect_head_cells(&root) {
            if let Some(hint) = layout.hint(&head.id) {
                println!(
                    "  {}: min {:?} max {:?} anchor {}",
                    head.id, hint.min_width, hint.max_width, hint.snap_anchor
                );
            }
        }
    }
}
