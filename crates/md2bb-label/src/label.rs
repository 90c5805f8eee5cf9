//! Stateful markdown label.

use md2bb::{ConvertError, Dispatcher, FormatOptions, parse_markdown};

use crate::sink::WidgetSink;
use crate::widget::RichTextWidget;

/// A rich-text widget wrapper that accepts markdown.
///
/// Retains the raw markdown source verbatim and renders the widget from
/// it: [`set_markdown`](Self::set_markdown) replaces the document, while
/// [`append_markdown`](Self::append_markdown) parses only the appended
/// increment and extends the live document — the widget keeps its own tag
/// stack across calls, so there is no string round-trip.
///
/// On error the widget may hold a partial render; that content is not a
/// contract guarantee and callers should reset or re-set the document.
pub struct MarkdownLabel<W> {
    widget: W,
    markdown: String,
    format: FormatOptions,
}

impl<W: RichTextWidget> MarkdownLabel<W> {
    /// Wrap `widget` with default formatting options.
    pub fn new(widget: W) -> Self {
        Self::with_format(widget, FormatOptions::default())
    }

    pub fn with_format(widget: W, format: FormatOptions) -> Self {
        Self {
            widget,
            markdown: String::new(),
            format,
        }
    }

    /// Replace the document with `markdown`.
    pub fn set_markdown(&mut self, markdown: impl Into<String>) -> Result<(), ConvertError> {
        self.markdown = markdown.into();
        self.widget.clear();
        Self::render(&mut self.widget, &self.format, &self.markdown)
    }

    /// Append markdown at the end of the document.
    ///
    /// Only the increment is parsed and inserted at the current end; a
    /// markdown construct split across the append boundary is parsed as
    /// two documents.
    pub fn append_markdown(&mut self, markdown: &str) -> Result<(), ConvertError> {
        self.markdown.push_str(markdown);
        Self::render(&mut self.widget, &self.format, markdown)
    }

    fn render(widget: &mut W, format: &FormatOptions, source: &str) -> Result<(), ConvertError> {
        let mut sink = WidgetSink::new(widget);
        let mut dispatch = Dispatcher::new(&mut sink, format);
        parse_markdown(source, &mut dispatch)
    }

    /// The raw markdown source, unconverted.
    #[must_use]
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    #[must_use]
    pub fn format(&self) -> &FormatOptions {
        &self.format
    }

    /// Replace the formatting options. Takes effect at the next
    /// `set_markdown` or `append_markdown` call.
    pub fn set_format(&mut self, format: FormatOptions) {
        self.format = format;
    }

    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Unwrap the underlying widget.
    #[must_use]
    pub fn into_widget(self) -> W {
        self.widget
    }
}
