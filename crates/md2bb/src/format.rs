//! User-configurable visual formatting options.
//!
//! [`FormatOptions`] is the entire configuration surface of a conversion:
//! six per-level heading styles and two table-cell styles. Options are
//! never mutated by the core; one instance can back any number of
//! conversions.

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Lowercase `rrggbb` hex as used by `[color=#...]`. Alpha is excluded.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 2D size/position value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Edge insets for cell padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
}

/// Minimum and maximum cell size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeOverride {
    pub min: Vector2,
    pub max: Vector2,
}

/// Visual style applied to one heading level.
///
/// Captured by value when a heading is entered, so the exit closes exactly
/// the tags the enter opened.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeadingStyle {
    /// Relative font size, must be positive.
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    /// Whether `font_color` applies.
    pub has_color: bool,
    pub font_color: Rgba,
}

impl HeadingStyle {
    /// Plain style with only a font size set.
    #[must_use]
    pub const fn sized(font_size: f32) -> Self {
        Self {
            font_size,
            bold: false,
            italic: false,
            underlined: false,
            has_color: false,
            font_color: Rgba::WHITE,
        }
    }
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self::sized(1.0)
    }
}

/// Visual style applied to all cells of one table section.
///
/// A `size_override` of `None` means "no override": applying the style
/// resets the destination to a zero-size override rather than leaving a
/// previous table's override in effect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellStyle {
    pub border_color: Rgba,
    pub padding: Rect,
    pub row_background_odd: Rgba,
    pub row_background_even: Rgba,
    pub size_override: Option<SizeOverride>,
}

/// Formatting options for one conversion.
///
/// Shared read-only with the dispatch core for the duration of a parse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Heading styles for levels 1 through 6, in order.
    pub headings: [HeadingStyle; 6],
    /// Cell style for table head sections.
    pub table_head: CellStyle,
    /// Cell style for table body sections.
    pub table_body: CellStyle,
}

impl FormatOptions {
    /// Style for a heading level. `None` outside 1-6.
    ///
    /// A direct one-to-one lookup: every level resolves to exactly its own
    /// slot.
    #[must_use]
    pub fn heading(&self, level: u8) -> Option<&HeadingStyle> {
        match level {
            1..=6 => Some(&self.headings[usize::from(level) - 1]),
            _ => None,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            headings: [
                HeadingStyle::sized(2.285),
                HeadingStyle::sized(1.714),
                HeadingStyle::sized(1.428),
                HeadingStyle::sized(1.142),
                HeadingStyle::sized(1.0),
                HeadingStyle::sized(0.857),
            ],
            table_head: CellStyle::default(),
            table_body: CellStyle::default(),
        }
    }
}
