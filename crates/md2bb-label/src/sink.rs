//! Binding from the dispatch core onto a live widget.

use md2bb::{CellStyle, TagKind, TagSink, TagSpec, Vector2};

use crate::widget::{ListKind, PushTag, RichTextWidget};

/// Realizes dispatch-core tag scopes as widget push/pop calls.
///
/// Structural differences from the flat tag grammar:
/// - list items have no scope of their own, items separate with newlines;
/// - blockquotes and table rows have no widget equivalent;
/// - thematic breaks are plain newlines;
/// - table sections become modal cell-style state on the widget.
pub struct WidgetSink<'w, W> {
    widget: &'w mut W,
}

impl<'w, W: RichTextWidget> WidgetSink<'w, W> {
    pub fn new(widget: &'w mut W) -> Self {
        Self { widget }
    }
}

impl<W: RichTextWidget> TagSink for WidgetSink<'_, W> {
    fn open_tag(&mut self, tag: &TagSpec<'_>) {
        match *tag {
            TagSpec::Quote | TagSpec::ListItem | TagSpec::TableRow => {}
            TagSpec::UnorderedList { mark } => self.widget.push(PushTag::List {
                start: 0,
                kind: ListKind::Dots,
                reversed: false,
                mark,
            }),
            TagSpec::OrderedList { delimiter, .. } => self.widget.push(PushTag::List {
                start: 0,
                kind: ListKind::Numbers,
                reversed: false,
                mark: delimiter,
            }),
            TagSpec::ThematicBreak => self.widget.add_text("\n"),
            TagSpec::Code => self.widget.push(PushTag::Mono),
            TagSpec::Paragraph => self.widget.push(PushTag::Paragraph),
            TagSpec::Table { columns } => self.widget.push(PushTag::Table { columns }),
            TagSpec::TableHeaderCell | TagSpec::TableDataCell => {
                self.widget.push(PushTag::Cell);
            }
            TagSpec::Italic => self.widget.push(PushTag::Italics),
            TagSpec::Bold => self.widget.push(PushTag::Bold),
            TagSpec::Strikethrough => self.widget.push(PushTag::Strikethrough),
            TagSpec::Underline => self.widget.push(PushTag::Underline),
            TagSpec::FontSize(size) => self.widget.push(PushTag::FontSize(size)),
            TagSpec::Color(color) => self.widget.push(PushTag::Color(color)),
            TagSpec::Hint(tooltip) => self.widget.push(PushTag::Hint(tooltip)),
            TagSpec::Url(href) => self.widget.push(PushTag::Url(href)),
        }
    }

    fn close_tag(&mut self, kind: TagKind) {
        match kind {
            TagKind::Quote | TagKind::TableRow => {}
            // Item separation is purely textual in the widget grammar.
            TagKind::ListItem | TagKind::ThematicBreak => self.widget.add_text("\n"),
            TagKind::UnorderedList
            | TagKind::OrderedList
            | TagKind::Code
            | TagKind::Paragraph
            | TagKind::Table
            | TagKind::TableHeaderCell
            | TagKind::TableDataCell
            | TagKind::Italic
            | TagKind::Bold
            | TagKind::Strikethrough
            | TagKind::Underline
            | TagKind::FontSize
            | TagKind::Color
            | TagKind::Hint
            | TagKind::Url => self.widget.pop(),
        }
    }

    fn text(&mut self, text: &str) {
        self.widget.add_text(text);
    }

    fn image(&mut self, src: &str) {
        // Appending markup here is easier than re-writing the widget's
        // image fetching; insert and close happen in one step.
        self.widget.append_markup(&format!("[img]{src}[/img]"));
    }

    fn apply_cell_style(&mut self, style: &CellStyle) {
        self.widget.set_cell_border_color(style.border_color);
        self.widget.set_cell_padding(style.padding);
        self.widget
            .set_cell_row_background(style.row_background_odd, style.row_background_even);
        match style.size_override {
            Some(size) => self.widget.set_cell_size_override(size.min, size.max),
            // Reset rather than leave a previous table's override active.
            None => self
                .widget
                .set_cell_size_override(Vector2::ZERO, Vector2::ZERO),
        }
    }
}
