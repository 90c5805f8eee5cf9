//! String-accumulating BBCode sink.

use std::fmt::Write;

use crate::sink::{TagKind, TagSink, TagSpec};

/// Linearizes tag scopes into a BBCode markup string.
///
/// Table head/body sections have no representation in the flat tag
/// grammar, so the cell-style hook keeps its default no-op.
#[derive(Debug, Default)]
pub struct BbCodeSink {
    out: String,
}

impl BbCodeSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(4096),
        }
    }

    /// Consume the sink and return the accumulated markup.
    #[must_use]
    pub fn into_markup(self) -> String {
        self.out
    }

    fn tag_name(kind: TagKind) -> &'static str {
        match kind {
            TagKind::Quote => "quote",
            TagKind::UnorderedList => "ul",
            TagKind::OrderedList => "ol",
            TagKind::ListItem => "li",
            TagKind::ThematicBreak => "hr",
            TagKind::Code => "code",
            TagKind::Paragraph => "p",
            TagKind::Table => "table",
            TagKind::TableRow => "tr",
            TagKind::TableHeaderCell => "th",
            TagKind::TableDataCell => "td",
            TagKind::Italic => "i",
            TagKind::Bold => "b",
            TagKind::Strikethrough => "s",
            TagKind::Underline => "u",
            TagKind::FontSize => "size",
            TagKind::Color => "color",
            TagKind::Hint => "hint",
            TagKind::Url => "url",
        }
    }
}

impl TagSink for BbCodeSink {
    fn open_tag(&mut self, tag: &TagSpec<'_>) {
        match *tag {
            TagSpec::FontSize(size) => write!(self.out, "[size={size}]").unwrap(),
            TagSpec::Color(color) => write!(self.out, "[color=#{}]", color.to_html()).unwrap(),
            TagSpec::Hint(tooltip) => write!(self.out, "[hint={tooltip}]").unwrap(),
            TagSpec::Url(href) => write!(self.out, "[url={href}]").unwrap(),
            _ => write!(self.out, "[{}]", Self::tag_name(tag.kind())).unwrap(),
        }
    }

    fn close_tag(&mut self, kind: TagKind) {
        write!(self.out, "[/{}]", Self::tag_name(kind)).unwrap();
    }

    fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn image(&mut self, src: &str) {
        write!(self.out, "[img]{src}[/img]").unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::format::Rgba;

    #[test]
    fn test_plain_tags() {
        let mut sink = BbCodeSink::new();
        sink.open_tag(&TagSpec::Bold);
        sink.text("bold");
        sink.close_tag(TagKind::Bold);
        assert_eq!(sink.into_markup(), "[b]bold[/b]");
    }

    #[test]
    fn test_font_size_formatting() {
        let mut sink = BbCodeSink::new();
        sink.open_tag(&TagSpec::FontSize(2.285));
        sink.close_tag(TagKind::FontSize);
        assert_eq!(sink.into_markup(), "[size=2.285][/size]");

        // Whole sizes print without a fraction.
        let mut sink = BbCodeSink::new();
        sink.open_tag(&TagSpec::FontSize(1.0));
        assert_eq!(sink.into_markup(), "[size=1]");
    }

    #[test]
    fn test_color_attribute() {
        let mut sink = BbCodeSink::new();
        sink.open_tag(&TagSpec::Color(Rgba::rgb(0x1a, 0x2b, 0x3c)));
        sink.close_tag(TagKind::Color);
        assert_eq!(sink.into_markup(), "[color=#1a2b3c][/color]");
    }

    #[test]
    fn test_hint_and_url_attributes() {
        let mut sink = BbCodeSink::new();
        sink.open_tag(&TagSpec::Hint("Tip"));
        sink.open_tag(&TagSpec::Url("http://x.test"));
        sink.close_tag(TagKind::Url);
        sink.close_tag(TagKind::Hint);
        assert_eq!(
            sink.into_markup(),
            "[hint=Tip][url=http://x.test][/url][/hint]"
        );
    }

    #[test]
    fn test_image_is_atomic() {
        let mut sink = BbCodeSink::new();
        sink.image("res://icon.png");
        assert_eq!(sink.into_markup(), "[img]res://icon.png[/img]");
    }

    #[test]
    fn test_list_tags_ignore_detail() {
        let mut sink = BbCodeSink::new();
        sink.open_tag(&TagSpec::OrderedList { start: 3, delimiter: ')' });
        sink.close_tag(TagKind::OrderedList);
        assert_eq!(sink.into_markup(), "[ol][/ol]");
    }
}
