//! Streaming markdown renderer for rich-text label widgets.
//!
//! Where [`md2bb::convert`] produces a finished tag-markup string, this
//! crate drives a live widget's push/pop tag stack directly. That skips
//! the string round-trip and keeps leaf features like inline images on the
//! widget's own resource loader.
//!
//! The widget is an injected capability: implement [`RichTextWidget`] for
//! the destination document and wrap it in [`MarkdownLabel`]. The crate
//! ships [`MockWidget`] for tests.
//!
//! # Example
//!
//! ```
//! use md2bb_label::{MarkdownLabel, MockWidget};
//!
//! let mut label = MarkdownLabel::new(MockWidget::new());
//! label.set_markdown("# Hello\n\n**bold** text").unwrap();
//! label.append_markdown("more text").unwrap();
//! assert_eq!(label.markdown(), "# Hello\n\n**bold** textmore text");
//! ```

mod label;
mod mock;
mod sink;
mod widget;

pub use label::MarkdownLabel;
pub use mock::{MockWidget, RecordedTag, WidgetOp};
pub use sink::WidgetSink;
pub use widget::{ListKind, PushTag, RichTextWidget};
