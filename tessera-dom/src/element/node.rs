use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Align, Direction, Edges, Size, Style, TextAlign};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub align: Align,

    // Visual
    pub style: Style,
    pub text_align: TextAlign,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Disabled elements are drawn but don't take part in hit testing.
    pub disabled: bool,

    // Custom data storage (component actions, state markers)
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            align: Align::Start,
            style: Style::default(),
            text_align: TextAlign::Left,
            focusable: false,
            clickable: false,
            disabled: false,
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    // Flex container
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    // Content accessors
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants, in tree order.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        super::walk(self, &mut |el| {
            if let Some(text) = el.text_content() {
                out.push_str(text);
            }
        });
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

    pub fn children_from(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Add `child` only when it is `Some`.
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }
}
