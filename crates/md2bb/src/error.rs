//! Conversion error types.

/// Error raised while converting markdown.
///
/// The first failing event aborts the conversion; no further events are
/// dispatched and any output produced before that point is discarded.
/// Conversions are deterministic, so retrying the same input reproduces
/// the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A block kind outside the supported mapping table.
    #[error("unrecognized markdown block kind: {kind}")]
    UnrecognizedBlock {
        /// Human-readable name of the offending block kind.
        kind: &'static str,
    },

    /// A span kind outside the supported mapping table.
    #[error("unrecognized markdown span kind: {kind}")]
    UnrecognizedSpan {
        /// Human-readable name of the offending span kind.
        kind: &'static str,
    },

    /// Heading level outside 1-6. The format model has exactly six slots.
    #[error("heading level {level} is out of range 1-6")]
    InvalidHeadingLevel {
        /// The level the producer delivered.
        level: u8,
    },

    /// LaTeX math rendering is not supported by the destination widget.
    #[error("LaTeX rendering is not supported")]
    UnsupportedConstruct,

    /// Wikilink resolution is not implemented.
    #[error("wikilinks are not yet supported, use normal links with file paths instead")]
    WikilinksUnsupported,
}

impl ConvertError {
    /// Integer status code, matching the converter's C-style codes
    /// (0 is success and is never constructed as an error).
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::UnrecognizedBlock { .. } => 1,
            Self::UnrecognizedSpan { .. }
            | Self::UnsupportedConstruct
            | Self::WikilinksUnsupported => 2,
            Self::InvalidHeadingLevel { .. } => 3,
        }
    }
}
