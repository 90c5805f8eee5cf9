//! Markdown to BBCode conversion.
//!
//! Converts markdown into the bracketed tag markup consumed by rich-text
//! label widgets, applying user-configurable formatting to headings and
//! table cells.
//!
//! # Architecture
//!
//! Two deployment shapes share one event dispatch core:
//! - [`convert`] turns a markdown string into a finished BBCode string;
//! - the `md2bb-label` crate drives a live widget's push/pop tag stack
//!   from the same events, skipping the string round-trip.
//!
//! The core is [`Dispatcher`], which maps typed parse events onto a
//! [`TagSink`]. [`BbCodeSink`] is the string binding; the widget binding
//! lives in `md2bb-label`. Events come from the pulldown-cmark tokenizer
//! via [`parse_markdown`], or from any other producer via
//! [`convert_events`].
//!
//! # Example
//!
//! ```
//! use md2bb::{FormatOptions, convert};
//!
//! let options = FormatOptions::default();
//! let bbcode = convert("# Title\n\n**bold** text", &options).unwrap();
//! assert_eq!(bbcode, "[size=2.285]Title[/size]\n[p][b]bold[/b] text[/p]");
//! ```
//!
//! Unsupported constructs are structured errors, not crashes: LaTeX math
//! and wikilinks abort the conversion with a [`ConvertError`] carrying the
//! original integer status codes.

mod bbcode;
mod converter;
mod dispatch;
mod error;
pub mod event;
mod format;
mod parser;
mod sink;
pub mod text;

pub use bbcode::BbCodeSink;
pub use converter::{convert, convert_events};
pub use dispatch::Dispatcher;
pub use error::ConvertError;
pub use format::{CellStyle, FormatOptions, HeadingStyle, Rect, Rgba, SizeOverride, Vector2};
pub use parser::parse_markdown;
pub use sink::{TagKind, TagSink, TagSpec};
