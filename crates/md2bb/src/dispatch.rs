//! Event dispatch core: maps parse events onto a tag sink.
//!
//! One dispatcher per conversion. Both output shapes — the string
//! converter and the live-widget renderer — feed their events through this
//! type; only the sink binding differs.

use crate::error::ConvertError;
use crate::event::{Block, MdEvent, Span, TextKind};
use crate::format::{FormatOptions, HeadingStyle};
use crate::sink::{TagKind, TagSink, TagSpec};
use crate::text::text_from_raw;

/// Per-conversion event dispatcher.
///
/// Owns the open-tag bookkeeping for one parse: heading styles captured at
/// heading-enter, hint flags captured at link-enter and the
/// once-per-document HTML warning. Created at the start of a conversion
/// and discarded at the end; never shared across conversions.
pub struct Dispatcher<'a, S> {
    sink: &'a mut S,
    options: &'a FormatOptions,
    /// Styles of currently open headings, captured at enter so the exit
    /// mirrors exactly the tags the enter opened.
    heading_stack: Vec<HeadingStyle>,
    /// Whether each currently open link opened a hint scope. A non-empty
    /// stack also means text events are label text and are suppressed.
    link_hints: Vec<bool>,
    html_warned: bool,
}

impl<'a, S: TagSink> Dispatcher<'a, S> {
    pub fn new(sink: &'a mut S, options: &'a FormatOptions) -> Self {
        Self {
            sink,
            options,
            heading_stack: Vec::new(),
            link_hints: Vec::new(),
            html_warned: false,
        }
    }

    /// Feed one event.
    ///
    /// The first error aborts the conversion; callers must not feed
    /// further events after an `Err`.
    pub fn dispatch(&mut self, event: &MdEvent<'_>) -> Result<(), ConvertError> {
        match event {
            MdEvent::Block { block, entering } => self.block(block, *entering),
            MdEvent::Span { span, entering } => self.span(span, *entering),
            MdEvent::Text { kind, raw } => {
                self.text(*kind, raw);
                Ok(())
            }
        }
    }

    fn block(&mut self, block: &Block<'_>, entering: bool) -> Result<(), ConvertError> {
        let tag = match *block {
            Block::Document => return Ok(()),
            Block::Quote => TagSpec::Quote,
            Block::UnorderedList { mark } => TagSpec::UnorderedList { mark },
            Block::OrderedList { start, delimiter } => TagSpec::OrderedList { start, delimiter },
            Block::ListItem => TagSpec::ListItem,
            Block::ThematicBreak => TagSpec::ThematicBreak,
            Block::Heading { level } => return self.heading(level, entering),
            // Fenced and indented code blocks are not distinguished.
            Block::CodeBlock { .. } => TagSpec::Code,
            Block::HtmlBlock => {
                if entering && !self.html_warned {
                    self.html_warned = true;
                    tracing::warn!(
                        "HTML rendering is not supported, rendering as a code block instead"
                    );
                }
                TagSpec::Code
            }
            Block::Paragraph => TagSpec::Paragraph,
            Block::Table { columns } => TagSpec::Table { columns },
            // Head and body sections emit no tag of their own; they select
            // which cell style applies to the cells that follow.
            Block::TableHead => {
                if entering {
                    self.sink.apply_cell_style(&self.options.table_head);
                }
                return Ok(());
            }
            Block::TableBody => {
                if entering {
                    self.sink.apply_cell_style(&self.options.table_body);
                }
                return Ok(());
            }
            Block::TableRow => TagSpec::TableRow,
            Block::TableHeaderCell => TagSpec::TableHeaderCell,
            Block::TableDataCell => TagSpec::TableDataCell,
            Block::FootnoteDefinition
            | Block::DefinitionList
            | Block::DefinitionListTitle
            | Block::DefinitionListDefinition
            | Block::Metadata => {
                return Err(ConvertError::UnrecognizedBlock { kind: block.name() });
            }
        };
        if entering {
            self.sink.open_tag(&tag);
        } else {
            self.sink.close_tag(tag.kind());
        }
        Ok(())
    }

    fn span(&mut self, span: &Span<'_>, entering: bool) -> Result<(), ConvertError> {
        let tag = match *span {
            Span::Emphasis => TagSpec::Italic,
            Span::Strong => TagSpec::Bold,
            Span::Link { href, title } => {
                self.link(href, title, entering);
                return Ok(());
            }
            Span::Image { src } => {
                // Insert and close happen in one step at enter; the exit
                // event is a no-op.
                if entering {
                    self.sink.image(src);
                }
                return Ok(());
            }
            Span::Code => TagSpec::Code,
            Span::Strikethrough => TagSpec::Strikethrough,
            Span::Underline => TagSpec::Underline,
            Span::LatexMath | Span::LatexMathDisplay => {
                return Err(ConvertError::UnsupportedConstruct);
            }
            Span::Wikilink { .. } => return Err(ConvertError::WikilinksUnsupported),
            Span::FootnoteReference | Span::Superscript | Span::Subscript => {
                return Err(ConvertError::UnrecognizedSpan { kind: span.name() });
            }
        };
        if entering {
            self.sink.open_tag(&tag);
        } else {
            self.sink.close_tag(tag.kind());
        }
        Ok(())
    }

    /// Two-state link handler: whether a hint scope was opened at enter is
    /// remembered until the matching exit. The visible label is the title
    /// attribute; the original label text never reaches the output.
    fn link(&mut self, href: &str, title: &str, entering: bool) {
        if entering {
            let hinted = !title.is_empty();
            if hinted {
                self.sink.open_tag(&TagSpec::Hint(title));
            }
            self.sink.open_tag(&TagSpec::Url(href));
            self.sink.text(title);
            self.link_hints.push(hinted);
        } else {
            let hinted = self.link_hints.pop().unwrap_or(false);
            self.sink.close_tag(TagKind::Url);
            if hinted {
                self.sink.close_tag(TagKind::Hint);
            }
        }
    }

    fn heading(&mut self, level: u8, entering: bool) -> Result<(), ConvertError> {
        if entering {
            let style = *self
                .options
                .heading(level)
                .ok_or(ConvertError::InvalidHeadingLevel { level })?;
            self.sink.open_tag(&TagSpec::FontSize(style.font_size));
            if style.bold {
                self.sink.open_tag(&TagSpec::Bold);
            }
            if style.italic {
                self.sink.open_tag(&TagSpec::Italic);
            }
            if style.underlined {
                self.sink.open_tag(&TagSpec::Underline);
            }
            if style.has_color {
                self.sink.open_tag(&TagSpec::Color(style.font_color));
            }
            self.heading_stack.push(style);
        } else {
            // An exit without a matching enter is a producer contract
            // violation and reported like an out-of-range level.
            let style = self
                .heading_stack
                .pop()
                .ok_or(ConvertError::InvalidHeadingLevel { level })?;
            if style.has_color {
                self.sink.close_tag(TagKind::Color);
            }
            if style.underlined {
                self.sink.close_tag(TagKind::Underline);
            }
            if style.italic {
                self.sink.close_tag(TagKind::Italic);
            }
            if style.bold {
                self.sink.close_tag(TagKind::Bold);
            }
            self.sink.close_tag(TagKind::FontSize);
            self.sink.text("\n");
        }
        Ok(())
    }

    fn text(&mut self, kind: TextKind, raw: &[u8]) {
        // Label text of an open link is suppressed; its title was emitted
        // at link-enter.
        if !self.link_hints.is_empty() {
            return;
        }
        match kind {
            TextKind::Normal | TextKind::Code | TextKind::Entity => {
                self.sink.text(&text_from_raw(raw));
            }
            TextKind::Break | TextKind::SoftBreak => self.sink.text("\n"),
            // Embedded NUL from the tokenizer.
            TextKind::NullChar => {}
            // Raw HTML spans and LaTeX source are dropped without error,
            // unlike HTML blocks which degrade to a code block with a
            // warning.
            TextKind::Html | TextKind::LatexMath => {}
        }
    }
}
