//! Rich-text widget capability trait.

use md2bb::{Rect, Rgba, Vector2};

/// Kind of a list scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bulleted list.
    Dots,
    /// Numbered list.
    Numbers,
}

/// A tag scope pushed onto a rich-text widget's stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PushTag<'a> {
    Bold,
    Italics,
    Underline,
    Strikethrough,
    /// Monospace scope: code blocks, code spans and degraded HTML blocks.
    Mono,
    FontSize(f32),
    Color(Rgba),
    Paragraph,
    List {
        /// Index of the first item.
        start: u64,
        kind: ListKind,
        reversed: bool,
        /// Marker or delimiter character from the source.
        mark: char,
    },
    Table {
        columns: usize,
    },
    Cell,
    /// Tooltip scope wrapping a link.
    Hint(&'a str),
    Url(&'a str),
}

/// Push/pop primitives of a destination rich-text document.
///
/// The widget owns its tag stack and keeps it across calls; the renderer
/// only drives this interface and never inherits from the widget. All
/// calls arrive strictly sequentially within one render; serializing
/// renders from multiple threads is the caller's responsibility.
pub trait RichTextWidget {
    /// Open a tag scope at the current position.
    fn push(&mut self, tag: PushTag<'_>);

    /// Close the most recently opened scope.
    fn pop(&mut self);

    /// Insert literal text at the current position.
    fn add_text(&mut self, text: &str);

    /// Insert pre-formed tag markup. Used for atomic image leaves so the
    /// widget's own markup parser handles the resource fetch.
    fn append_markup(&mut self, markup: &str);

    /// Remove all content and close all open scopes.
    fn clear(&mut self);

    /// Border color for all cells pushed afterwards.
    fn set_cell_border_color(&mut self, color: Rgba);

    /// Padding for all cells pushed afterwards.
    fn set_cell_padding(&mut self, padding: Rect);

    /// Alternating row background colors for all cells pushed afterwards.
    fn set_cell_row_background(&mut self, odd: Rgba, even: Rgba);

    /// Minimum and maximum size for all cells pushed afterwards. Zero
    /// vectors mean no override.
    fn set_cell_size_override(&mut self, min: Vector2, max: Vector2);
}
