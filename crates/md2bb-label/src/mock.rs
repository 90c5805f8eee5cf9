//! Mock widget for testing.
//!
//! Records every capability call so tests can assert on the exact
//! push/pop/text sequence a render produced, without a real rendering
//! widget.

use md2bb::{Rect, Rgba, Vector2};

use crate::widget::{ListKind, PushTag, RichTextWidget};

/// Owned copy of a pushed tag, as recorded by [`MockWidget`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedTag {
    Bold,
    Italics,
    Underline,
    Strikethrough,
    Mono,
    FontSize(f32),
    Color(Rgba),
    Paragraph,
    List {
        start: u64,
        kind: ListKind,
        reversed: bool,
        mark: char,
    },
    Table {
        columns: usize,
    },
    Cell,
    Hint(String),
    Url(String),
}

impl From<PushTag<'_>> for RecordedTag {
    fn from(tag: PushTag<'_>) -> Self {
        match tag {
            PushTag::Bold => Self::Bold,
            PushTag::Italics => Self::Italics,
            PushTag::Underline => Self::Underline,
            PushTag::Strikethrough => Self::Strikethrough,
            PushTag::Mono => Self::Mono,
            PushTag::FontSize(size) => Self::FontSize(size),
            PushTag::Color(color) => Self::Color(color),
            PushTag::Paragraph => Self::Paragraph,
            PushTag::List { start, kind, reversed, mark } => {
                Self::List { start, kind, reversed, mark }
            }
            PushTag::Table { columns } => Self::Table { columns },
            PushTag::Cell => Self::Cell,
            PushTag::Hint(tooltip) => Self::Hint(tooltip.to_owned()),
            PushTag::Url(href) => Self::Url(href.to_owned()),
        }
    }
}

/// One recorded widget call.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOp {
    Push(RecordedTag),
    Pop,
    Text(String),
    Markup(String),
    Clear,
    CellBorderColor(Rgba),
    CellPadding(Rect),
    CellRowBackground(Rgba, Rgba),
    CellSizeOverride(Vector2, Vector2),
}

/// In-memory widget recording all calls in order.
#[derive(Debug, Default)]
pub struct MockWidget {
    ops: Vec<WidgetOp>,
}

impl MockWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in order.
    #[must_use]
    pub fn ops(&self) -> &[WidgetOp] {
        &self.ops
    }

    /// Concatenated literal text, ignoring tags and markup.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                WidgetOp::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of pushes minus number of pops. Zero after a balanced
    /// render.
    #[must_use]
    pub fn open_scopes(&self) -> i64 {
        self.ops
            .iter()
            .map(|op| match op {
                WidgetOp::Push(_) => 1,
                WidgetOp::Pop => -1,
                _ => 0,
            })
            .sum()
    }
}

impl RichTextWidget for MockWidget {
    fn push(&mut self, tag: PushTag<'_>) {
        self.ops.push(WidgetOp::Push(tag.into()));
    }

    fn pop(&mut self) {
        self.ops.push(WidgetOp::Pop);
    }

    fn add_text(&mut self, text: &str) {
        self.ops.push(WidgetOp::Text(text.to_owned()));
    }

    fn append_markup(&mut self, markup: &str) {
        self.ops.push(WidgetOp::Markup(markup.to_owned()));
    }

    fn clear(&mut self) {
        self.ops.push(WidgetOp::Clear);
    }

    fn set_cell_border_color(&mut self, color: Rgba) {
        self.ops.push(WidgetOp::CellBorderColor(color));
    }

    fn set_cell_padding(&mut self, padding: Rect) {
        self.ops.push(WidgetOp::CellPadding(padding));
    }

    fn set_cell_row_background(&mut self, odd: Rgba, even: Rgba) {
        self.ops.push(WidgetOp::CellRowBackground(odd, even));
    }

    fn set_cell_size_override(&mut self, min: Vector2, max: Vector2) {
        self.ops.push(WidgetOp::CellSizeOverride(min, max));
    }
}
