//! Adapter from pulldown-cmark events to the dispatch core.
//!
//! The tokenizer vocabulary differs from the core's in a few places; the
//! driver reshapes it:
//! - `TableHead` covers only the header row, so head/body section events
//!   are synthesized around it and cell styles switch exactly once per
//!   section;
//! - `Rule` is a single event and is delivered as an enter/exit pair;
//! - inline code arrives as one event and is delivered as span-enter, code
//!   text, span-exit;
//! - raw HTML inside an HTML block is the degraded code block's content
//!   and is delivered as code text, while inline raw HTML keeps its own
//!   text kind and is dropped by the core.

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd,
};

use crate::dispatch::Dispatcher;
use crate::error::ConvertError;
use crate::event::{Block, MdEvent, Span, TextKind};
use crate::sink::TagSink;

/// Extensions enabled for every conversion. Wikilinks and math parse so
/// they can be rejected with a structured error instead of passing through
/// as plain text.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_WIKILINKS
        | Options::ENABLE_MATH
}

/// Run `source` through the tokenizer, feeding every event to `dispatch`.
///
/// Stops at the first failing event and returns its error.
pub fn parse_markdown<S: TagSink>(
    source: &str,
    dispatch: &mut Dispatcher<'_, S>,
) -> Result<(), ConvertError> {
    let mut driver = Driver::default();
    dispatch.dispatch(&MdEvent::enter(Block::Document))?;
    for event in Parser::new_ext(source, parser_options()) {
        driver.event(event, dispatch)?;
    }
    dispatch.dispatch(&MdEvent::leave(Block::Document))
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Tokenizer-shape state for one parse.
#[derive(Default)]
struct Driver {
    in_code_block: bool,
    in_html_block: bool,
    in_table_head: bool,
    body_open: bool,
}

impl Driver {
    fn event<S: TagSink>(
        &mut self,
        event: Event<'_>,
        dispatch: &mut Dispatcher<'_, S>,
    ) -> Result<(), ConvertError> {
        match event {
            Event::Start(tag) => self.start(tag, dispatch),
            Event::End(tag) => self.end(tag, dispatch),
            Event::Text(text) => {
                let kind = if self.in_code_block {
                    TextKind::Code
                } else {
                    TextKind::Normal
                };
                dispatch.dispatch(&MdEvent::Text { kind, raw: text.as_bytes() })
            }
            Event::Code(code) => {
                dispatch.dispatch(&MdEvent::enter_span(Span::Code))?;
                dispatch.dispatch(&MdEvent::Text {
                    kind: TextKind::Code,
                    raw: code.as_bytes(),
                })?;
                dispatch.dispatch(&MdEvent::leave_span(Span::Code))
            }
            Event::Html(html) => {
                // Block-level raw HTML is the content of the degraded code
                // block; outside one it is dropped like inline HTML.
                let kind = if self.in_html_block {
                    TextKind::Code
                } else {
                    TextKind::Html
                };
                dispatch.dispatch(&MdEvent::Text { kind, raw: html.as_bytes() })
            }
            Event::InlineHtml(html) => dispatch.dispatch(&MdEvent::Text {
                kind: TextKind::Html,
                raw: html.as_bytes(),
            }),
            Event::SoftBreak => {
                dispatch.dispatch(&MdEvent::Text { kind: TextKind::SoftBreak, raw: b"" })
            }
            Event::HardBreak => {
                dispatch.dispatch(&MdEvent::Text { kind: TextKind::Break, raw: b"" })
            }
            Event::Rule => {
                dispatch.dispatch(&MdEvent::enter(Block::ThematicBreak))?;
                dispatch.dispatch(&MdEvent::leave(Block::ThematicBreak))
            }
            Event::InlineMath(_) => dispatch.dispatch(&MdEvent::enter_span(Span::LatexMath)),
            Event::DisplayMath(_) => {
                dispatch.dispatch(&MdEvent::enter_span(Span::LatexMathDisplay))
            }
            Event::FootnoteReference(_) => {
                dispatch.dispatch(&MdEvent::enter_span(Span::FootnoteReference))
            }
            // Task lists are not enabled; reject rather than guess a
            // rendering if a foreign event stream ever delivers one.
            Event::TaskListMarker(_) => {
                Err(ConvertError::UnrecognizedSpan { kind: "task list marker" })
            }
        }
    }

    fn start<S: TagSink>(
        &mut self,
        tag: Tag<'_>,
        dispatch: &mut Dispatcher<'_, S>,
    ) -> Result<(), ConvertError> {
        match tag {
            Tag::Paragraph => dispatch.dispatch(&MdEvent::enter(Block::Paragraph)),
            Tag::Heading { level, .. } => dispatch.dispatch(&MdEvent::enter(Block::Heading {
                level: heading_level(level),
            })),
            Tag::BlockQuote(_) => dispatch.dispatch(&MdEvent::enter(Block::Quote)),
            Tag::CodeBlock(kind) => {
                self.in_code_block = true;
                let language = match &kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => {
                        info.split_whitespace().next()
                    }
                    _ => None,
                };
                dispatch.dispatch(&MdEvent::enter(Block::CodeBlock { language }))
            }
            Tag::HtmlBlock => {
                self.in_html_block = true;
                dispatch.dispatch(&MdEvent::enter(Block::HtmlBlock))
            }
            // The tokenizer does not surface the literal marker character,
            // so the common defaults stand in for it.
            Tag::List(start) => dispatch.dispatch(&MdEvent::enter(match start {
                Some(start) => Block::OrderedList { start, delimiter: '.' },
                None => Block::UnorderedList { mark: '-' },
            })),
            Tag::Item => dispatch.dispatch(&MdEvent::enter(Block::ListItem)),
            Tag::Table(alignments) => {
                self.in_table_head = false;
                self.body_open = false;
                dispatch.dispatch(&MdEvent::enter(Block::Table {
                    columns: alignments.len(),
                }))
            }
            Tag::TableHead => {
                self.in_table_head = true;
                dispatch.dispatch(&MdEvent::enter(Block::TableHead))?;
                dispatch.dispatch(&MdEvent::enter(Block::TableRow))
            }
            Tag::TableRow => dispatch.dispatch(&MdEvent::enter(Block::TableRow)),
            Tag::TableCell => dispatch.dispatch(&MdEvent::enter(if self.in_table_head {
                Block::TableHeaderCell
            } else {
                Block::TableDataCell
            })),
            Tag::Emphasis => dispatch.dispatch(&MdEvent::enter_span(Span::Emphasis)),
            Tag::Strong => dispatch.dispatch(&MdEvent::enter_span(Span::Strong)),
            Tag::Strikethrough => dispatch.dispatch(&MdEvent::enter_span(Span::Strikethrough)),
            Tag::Link { link_type, dest_url, title, .. } => {
                dispatch.dispatch(&if matches!(link_type, LinkType::WikiLink { .. }) {
                    MdEvent::enter_span(Span::Wikilink { target: dest_url.as_ref() })
                } else {
                    MdEvent::enter_span(Span::Link {
                        href: dest_url.as_ref(),
                        title: title.as_ref(),
                    })
                })
            }
            Tag::Image { dest_url, .. } => {
                dispatch.dispatch(&MdEvent::enter_span(Span::Image { src: dest_url.as_ref() }))
            }
            Tag::Superscript => dispatch.dispatch(&MdEvent::enter_span(Span::Superscript)),
            Tag::Subscript => dispatch.dispatch(&MdEvent::enter_span(Span::Subscript)),
            Tag::FootnoteDefinition(_) => {
                dispatch.dispatch(&MdEvent::enter(Block::FootnoteDefinition))
            }
            Tag::DefinitionList => dispatch.dispatch(&MdEvent::enter(Block::DefinitionList)),
            Tag::DefinitionListTitle => {
                dispatch.dispatch(&MdEvent::enter(Block::DefinitionListTitle))
            }
            Tag::DefinitionListDefinition => {
                dispatch.dispatch(&MdEvent::enter(Block::DefinitionListDefinition))
            }
            Tag::MetadataBlock(_) => dispatch.dispatch(&MdEvent::enter(Block::Metadata)),
        }
    }

    fn end<S: TagSink>(
        &mut self,
        tag: TagEnd,
        dispatch: &mut Dispatcher<'_, S>,
    ) -> Result<(), ConvertError> {
        match tag {
            TagEnd::Paragraph => dispatch.dispatch(&MdEvent::leave(Block::Paragraph)),
            TagEnd::Heading(level) => dispatch.dispatch(&MdEvent::leave(Block::Heading {
                level: heading_level(level),
            })),
            TagEnd::BlockQuote(_) => dispatch.dispatch(&MdEvent::leave(Block::Quote)),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                dispatch.dispatch(&MdEvent::leave(Block::CodeBlock { language: None }))
            }
            TagEnd::HtmlBlock => {
                self.in_html_block = false;
                dispatch.dispatch(&MdEvent::leave(Block::HtmlBlock))
            }
            TagEnd::List(ordered) => dispatch.dispatch(&MdEvent::leave(if ordered {
                Block::OrderedList { start: 0, delimiter: '.' }
            } else {
                Block::UnorderedList { mark: '-' }
            })),
            TagEnd::Item => dispatch.dispatch(&MdEvent::leave(Block::ListItem)),
            TagEnd::Table => {
                if self.body_open {
                    self.body_open = false;
                    dispatch.dispatch(&MdEvent::leave(Block::TableBody))?;
                }
                dispatch.dispatch(&MdEvent::leave(Block::Table { columns: 0 }))
            }
            TagEnd::TableHead => {
                self.in_table_head = false;
                dispatch.dispatch(&MdEvent::leave(Block::TableRow))?;
                dispatch.dispatch(&MdEvent::leave(Block::TableHead))?;
                self.body_open = true;
                dispatch.dispatch(&MdEvent::enter(Block::TableBody))
            }
            TagEnd::TableRow => dispatch.dispatch(&MdEvent::leave(Block::TableRow)),
            TagEnd::TableCell => dispatch.dispatch(&MdEvent::leave(if self.in_table_head {
                Block::TableHeaderCell
            } else {
                Block::TableDataCell
            })),
            TagEnd::Emphasis => dispatch.dispatch(&MdEvent::leave_span(Span::Emphasis)),
            TagEnd::Strong => dispatch.dispatch(&MdEvent::leave_span(Span::Strong)),
            TagEnd::Strikethrough => {
                dispatch.dispatch(&MdEvent::leave_span(Span::Strikethrough))
            }
            TagEnd::Link => {
                dispatch.dispatch(&MdEvent::leave_span(Span::Link { href: "", title: "" }))
            }
            TagEnd::Image => dispatch.dispatch(&MdEvent::leave_span(Span::Image { src: "" })),
            TagEnd::Superscript => dispatch.dispatch(&MdEvent::leave_span(Span::Superscript)),
            TagEnd::Subscript => dispatch.dispatch(&MdEvent::leave_span(Span::Subscript)),
            TagEnd::FootnoteDefinition => {
                dispatch.dispatch(&MdEvent::leave(Block::FootnoteDefinition))
            }
            TagEnd::DefinitionList => dispatch.dispatch(&MdEvent::leave(Block::DefinitionList)),
            TagEnd::DefinitionListTitle => {
                dispatch.dispatch(&MdEvent::leave(Block::DefinitionListTitle))
            }
            TagEnd::DefinitionListDefinition => {
                dispatch.dispatch(&MdEvent::leave(Block::DefinitionListDefinition))
            }
            TagEnd::MetadataBlock(_) => dispatch.dispatch(&MdEvent::leave(Block::Metadata)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::format::{CellStyle, FormatOptions, Rgba};
    use crate::sink::{TagKind, TagSpec};

    /// Sink that records the dispatch-core calls it receives.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl TagSink for RecordingSink {
        fn open_tag(&mut self, tag: &TagSpec<'_>) {
            self.calls.push(format!("open {:?}", tag.kind()));
        }

        fn close_tag(&mut self, kind: TagKind) {
            self.calls.push(format!("close {kind:?}"));
        }

        fn text(&mut self, text: &str) {
            self.calls.push(format!("text {text:?}"));
        }

        fn image(&mut self, src: &str) {
            self.calls.push(format!("image {src}"));
        }

        fn apply_cell_style(&mut self, style: &CellStyle) {
            self.calls.push(format!("cell-style {:?}", style.border_color));
        }
    }

    fn record(source: &str, options: &FormatOptions) -> Vec<String> {
        let mut sink = RecordingSink::default();
        let mut dispatch = Dispatcher::new(&mut sink, options);
        parse_markdown(source, &mut dispatch).unwrap();
        sink.calls
    }

    #[test]
    fn test_table_sections_are_synthesized() {
        let mut options = FormatOptions::default();
        options.table_head.border_color = Rgba::rgb(1, 1, 1);
        options.table_body.border_color = Rgba::rgb(2, 2, 2);

        let calls = record("| A | B |\n|---|---|\n| 1 | 2 |", &options);
        let expected = vec![
            "open Table",
            "cell-style Rgba { r: 1, g: 1, b: 1, a: 255 }",
            "open TableRow",
            "open TableHeaderCell",
            "text \"A\"",
            "close TableHeaderCell",
            "open TableHeaderCell",
            "text \"B\"",
            "close TableHeaderCell",
            "close TableRow",
            "cell-style Rgba { r: 2, g: 2, b: 2, a: 255 }",
            "open TableRow",
            "open TableDataCell",
            "text \"1\"",
            "close TableDataCell",
            "open TableDataCell",
            "text \"2\"",
            "close TableDataCell",
            "close TableRow",
            "close Table",
        ];
        assert_eq!(calls, expected);
    }

    #[test]
    fn test_rule_becomes_enter_exit_pair() {
        let options = FormatOptions::default();
        let calls = record("---", &options);
        assert_eq!(calls, vec!["open ThematicBreak", "close ThematicBreak"]);
    }

    #[test]
    fn test_inline_code_becomes_span_text_span() {
        let options = FormatOptions::default();
        let calls = record("`x`", &options);
        assert_eq!(
            calls,
            vec![
                "open Paragraph",
                "open Code",
                "text \"x\"",
                "close Code",
                "close Paragraph",
            ]
        );
    }

    #[test]
    fn test_fence_info_first_token_is_the_language() {
        let options = FormatOptions::default();
        // Language is carried in the event but does not change the output.
        let calls = record("```rust,ignore\ncode\n```", &options);
        assert_eq!(
            calls,
            vec!["open Code", "text \"code\\n\"", "close Code"]
        );
    }
}
