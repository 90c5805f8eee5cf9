//! Output sink seam between the dispatch core and its bindings.
//!
//! The core maps events to sink calls; what a call means is up to the
//! binding. [`crate::BbCodeSink`] linearizes scopes into bracketed tag
//! text, while the widget binding in `md2bb-label` turns them into
//! push/pop calls on a live rich-text document.

use crate::format::{CellStyle, Rgba};

/// A tag scope the dispatch core asks a sink to open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagSpec<'a> {
    Quote,
    UnorderedList { mark: char },
    OrderedList { start: u64, delimiter: char },
    ListItem,
    ThematicBreak,
    /// Monospace scope: code blocks, code spans and degraded HTML blocks.
    Code,
    Paragraph,
    Table { columns: usize },
    TableRow,
    TableHeaderCell,
    TableDataCell,
    Italic,
    Bold,
    Strikethrough,
    Underline,
    FontSize(f32),
    Color(Rgba),
    /// Tooltip scope wrapping a link.
    Hint(&'a str),
    Url(&'a str),
}

impl TagSpec<'_> {
    /// Payload-free kind of this tag, used to close its scope.
    #[must_use]
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Quote => TagKind::Quote,
            Self::UnorderedList { .. } => TagKind::UnorderedList,
            Self::OrderedList { .. } => TagKind::OrderedList,
            Self::ListItem => TagKind::ListItem,
            Self::ThematicBreak => TagKind::ThematicBreak,
            Self::Code => TagKind::Code,
            Self::Paragraph => TagKind::Paragraph,
            Self::Table { .. } => TagKind::Table,
            Self::TableRow => TagKind::TableRow,
            Self::TableHeaderCell => TagKind::TableHeaderCell,
            Self::TableDataCell => TagKind::TableDataCell,
            Self::Italic => TagKind::Italic,
            Self::Bold => TagKind::Bold,
            Self::Strikethrough => TagKind::Strikethrough,
            Self::Underline => TagKind::Underline,
            Self::FontSize(_) => TagKind::FontSize,
            Self::Color(_) => TagKind::Color,
            Self::Hint(_) => TagKind::Hint,
            Self::Url(_) => TagKind::Url,
        }
    }
}

/// Payload-free tag kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Quote,
    UnorderedList,
    OrderedList,
    ListItem,
    ThematicBreak,
    Code,
    Paragraph,
    Table,
    TableRow,
    TableHeaderCell,
    TableDataCell,
    Italic,
    Bold,
    Strikethrough,
    Underline,
    FontSize,
    Color,
    Hint,
    Url,
}

/// Destination of the event dispatch core.
///
/// Open and close calls arrive in matched pairs in document order; the
/// innermost open scope is always the one closed next.
pub trait TagSink {
    /// Open a tag scope.
    fn open_tag(&mut self, tag: &TagSpec<'_>);

    /// Close the innermost open scope of `kind`.
    fn close_tag(&mut self, kind: TagKind);

    /// Insert literal text at the current position.
    fn text(&mut self, text: &str);

    /// Insert an image leaf. Fired on span enter only; there is no
    /// matching close.
    fn image(&mut self, src: &str);

    /// Apply a table-section cell style to all cells opened afterwards.
    ///
    /// The flat tag grammar has no cell-style primitive, so the default
    /// does nothing.
    fn apply_cell_style(&mut self, style: &CellStyle) {
        let _ = style;
    }
}
