use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Edges, Slot};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A passive structural element of the table tree.
///
/// Elements impose no behavior of their own: they carry a structural slot
/// marker, a baseline class set merged with user classes, pass-through
/// attributes, and (for header cells) an optional declared minimum width.
/// The adaptive layout reads this tree and returns sizing hints keyed by
/// element id; it never mutates the tree.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub slot: Slot,

    // Content
    pub content: Content,

    // Sizing input (header cells only; others leave it None)
    pub min_width: Option<u16>,
    pub padding: Edges,

    // Pass-through configuration surface
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
}

impl Element {
    fn with_slot(slot: Slot, prefix: &str) -> Self {
        Self {
            id: generate_id(prefix),
            slot,
            content: Content::None,
            min_width: None,
            padding: Edges::default(),
            classes: Vec::new(),
            attrs: HashMap::new(),
        }
    }

    /// Scrollable wrapper around the table. Horizontal scroll/snap
    /// configuration lives in its baseline classes.
    pub fn container() -> Self {
        Self::with_slot(Slot::Container, "container")
    }

    pub fn table() -> Self {
        Self::with_slot(Slot::Table, "table")
    }

    pub fn header() -> Self {
        Self::with_slot(Slot::Header, "header")
    }

    pub fn body() -> Self {
        Self::with_slot(Slot::Body, "body")
    }

    pub fn footer() -> Self {
        Self::with_slot(Slot::Footer, "footer")
    }

    pub fn row() -> Self {
        Self::with_slot(Slot::Row, "row")
    }

    /// Header cell with its column label.
    pub fn head(label: impl Into<String>) -> Self {
        let mut el = Self::with_slot(Slot::Head, "head");
        el.content = Content::Text(label.into());
        el.padding = Edges::horizontal(1);
        el
    }

    /// Data cell with its text content.
    pub fn cell(content: impl Into<String>) -> Self {
        let mut el = Self::with_slot(Slot::Cell, "cell");
        el.content = Content::Text(content.into());
        el.padding = Edges::all(1);
        el
    }

    pub fn caption(content: impl Into<String>) -> Self {
        let mut el = Self::with_slot(Slot::Caption, "caption");
        el.content = Content::Text(content.into());
        el
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Sizing
    /// Declared minimum width in display cells. Meaningful on header cells;
    /// reapplied as the only sizing hint on every layout reset.
    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    // Pass-through surface
    /// Append a class on top of the slot's baseline class set.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Arbitrary pass-through attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Full class string: baseline classes followed by user classes.
    pub fn class_list(&self) -> String {
        let mut out = self.slot.baseline_classes().to_string();
        for class in &self.classes {
            out.push(' ');
            out.push_str(class);
        }
        out
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
