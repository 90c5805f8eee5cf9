//! Markdown to BBCode string conversion.

use crate::bbcode::BbCodeSink;
use crate::dispatch::Dispatcher;
use crate::error::ConvertError;
use crate::event::MdEvent;
use crate::format::FormatOptions;
use crate::parser::parse_markdown;

/// Convert markdown text into a BBCode markup string.
///
/// Stateless per call: the options are only read, and all conversion state
/// lives for the duration of this call. On error nothing is returned; any
/// markup produced before the failing event is discarded.
pub fn convert(markdown: &str, options: &FormatOptions) -> Result<String, ConvertError> {
    let mut sink = BbCodeSink::new();
    let mut dispatch = Dispatcher::new(&mut sink, options);
    parse_markdown(markdown, &mut dispatch)?;
    Ok(sink.into_markup())
}

/// Convert a pre-tokenized event sequence into a BBCode markup string.
///
/// Entry point for producers other than the built-in tokenizer. Events
/// must arrive in document order with enter/exit pairing; the first
/// failing event aborts the conversion.
pub fn convert_events<'a, I>(events: I, options: &FormatOptions) -> Result<String, ConvertError>
where
    I: IntoIterator<Item = MdEvent<'a>>,
{
    let mut sink = BbCodeSink::new();
    let mut dispatch = Dispatcher::new(&mut sink, options);
    for event in events {
        dispatch.dispatch(&event)?;
    }
    Ok(sink.into_markup())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ConvertError;

    fn convert_default(markdown: &str) -> Result<String, ConvertError> {
        convert(markdown, &FormatOptions::default())
    }

    #[test]
    fn test_heading_with_default_style() {
        let markup = convert_default("# Title").unwrap();
        assert_eq!(markup, "[size=2.285]Title[/size]\n");
    }

    #[test]
    fn test_heading_levels_use_their_own_size() {
        assert_eq!(convert_default("## Two").unwrap(), "[size=1.714]Two[/size]\n");
        assert_eq!(
            convert_default("###### Six").unwrap(),
            "[size=0.857]Six[/size]\n"
        );
    }

    #[test]
    fn test_emphasis_and_strong() {
        let markup = convert_default("**bold** and *em*").unwrap();
        assert!(markup.contains("[b]bold[/b] and [i]em[/i]"));
    }

    #[test]
    fn test_paragraphs_are_tagged() {
        let markup = convert_default("one\n\ntwo").unwrap();
        assert_eq!(markup, "[p]one[/p][p]two[/p]");
    }

    #[test]
    fn test_strikethrough() {
        let markup = convert_default("~~deleted~~").unwrap();
        assert!(markup.contains("[s]deleted[/s]"));
    }

    #[test]
    fn test_unordered_list() {
        let markup = convert_default("- a\n- b").unwrap();
        assert_eq!(markup, "[ul][li]a[/li][li]b[/li][/ul]");
    }

    #[test]
    fn test_ordered_list() {
        let markup = convert_default("1. first\n2. second").unwrap();
        assert_eq!(markup, "[ol][li]first[/li][li]second[/li][/ol]");
    }

    #[test]
    fn test_blockquote() {
        let markup = convert_default("> Note").unwrap();
        assert_eq!(markup, "[quote][p]Note[/p][/quote]");
    }

    #[test]
    fn test_code_block() {
        let markup = convert_default("```rust\nfn main() {}\n```").unwrap();
        assert_eq!(markup, "[code]fn main() {}\n[/code]");
    }

    #[test]
    fn test_indented_code_block_is_not_distinguished() {
        let markup = convert_default("    indented\n").unwrap();
        assert_eq!(markup, "[code]indented\n[/code]");
    }

    #[test]
    fn test_thematic_break() {
        let markup = convert_default("---").unwrap();
        assert_eq!(markup, "[hr][/hr]");
    }

    #[test]
    fn test_table() {
        let markup = convert_default("| A | B |\n|---|---|\n| 1 | 2 |").unwrap();
        assert_eq!(
            markup,
            "[table][tr][th]A[/th][th]B[/th][/tr][tr][td]1[/td][td]2[/td][/tr][/table]"
        );
    }

    #[test]
    fn test_link_with_title() {
        let markup = convert_default(r#"[Example](http://x.test "Tip")"#).unwrap();
        // The visible label is the title attribute, not the link text.
        assert_eq!(markup, "[p][hint=Tip][url=http://x.test]Tip[/url][/hint][/p]");
    }

    #[test]
    fn test_link_without_title() {
        let markup = convert_default("[Example](http://x.test)").unwrap();
        assert_eq!(markup, "[p][url=http://x.test][/url][/p]");
    }

    #[test]
    fn test_image() {
        let markup = convert_default("![Alt](image.png)").unwrap();
        assert!(markup.contains("[img]image.png[/img]"));
    }

    #[test]
    fn test_inline_latex_is_rejected() {
        let err = convert_default("some $x^2$ math").unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedConstruct);
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn test_display_latex_is_rejected() {
        let err = convert_default("$$\\int x\\,dx$$").unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedConstruct);
    }

    #[test]
    fn test_wikilink_is_rejected() {
        let err = convert_default("see [[Page]] for details").unwrap_err();
        assert_eq!(err, ConvertError::WikilinksUnsupported);
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn test_html_block_degrades_to_code() {
        let markup = convert_default("<div>\nhi\n</div>").unwrap();
        assert!(markup.starts_with("[code]<div>"));
        assert!(markup.ends_with("[/code]"));
    }

    #[test]
    fn test_inline_html_is_dropped() {
        let markup = convert_default("a <b>c</b> d").unwrap();
        assert_eq!(markup, "[p]a c d[/p]");
    }

    #[test]
    fn test_soft_and_hard_breaks() {
        assert_eq!(convert_default("one\ntwo").unwrap(), "[p]one\ntwo[/p]");
        assert_eq!(convert_default("one  \ntwo").unwrap(), "[p]one\ntwo[/p]");
    }

    #[test]
    fn test_plain_input_succeeds() {
        let markup = convert_default(
            "# Doc\n\nText with **bold**.\n\n- item\n\n> quote\n",
        );
        assert!(markup.is_ok());
        assert!(!markup.unwrap().is_empty());
    }

    #[test]
    fn test_own_output_passes_through_as_plain_text() {
        // Tag markup contains no markdown constructs; converting it again
        // keeps the tag text intact (no escaping, no re-interpretation).
        let markup = convert_default("**bold** and *em*").unwrap();
        let again = convert_default(&markup).unwrap();
        assert!(again.contains("[b]bold[/b] and [i]em[/i]"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_default("").unwrap(), "");
    }

    #[test]
    fn test_convert_events_document_passthrough() {
        use crate::event::{Block, MdEvent, TextKind};

        let markup = convert_events(
            vec![
                MdEvent::enter(Block::Document),
                MdEvent::enter(Block::Paragraph),
                MdEvent::text(TextKind::Normal, "hi"),
                MdEvent::leave(Block::Paragraph),
                MdEvent::leave(Block::Document),
            ],
            &FormatOptions::default(),
        )
        .unwrap();
        assert_eq!(markup, "[p]hi[/p]");
    }
}
