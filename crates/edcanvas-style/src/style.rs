#![forbid(unsafe_code)]

//! Canvas container style records.
//!
//! A [`CanvasStyle`] only carries the properties the canvas margins touch:
//! width, max-width, cross-axis self alignment and flex direction. Every
//! property is optional; an unset property means "inherit whatever the
//! previous record in the cascade said".
//!
//! # Cascade
//!
//! ```
//! use edcanvas_style::{CanvasStyle, Length};
//!
//! let base = CanvasStyle::new().max_width(Length::Points(580.0));
//! let wide = CanvasStyle::new().max_width(Length::Points(770.0));
//! assert_eq!(base.merge(&wide).max_width, Some(Length::Points(770.0)));
//! ```

use std::fmt;
use std::str::FromStr;

/// A length in device-independent points or a percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LengthRepr", into = "LengthRepr")
)]
pub enum Length {
    /// Absolute length in points.
    Points(f32),
    /// Percentage of the containing block (`100.0` is full width).
    Percent(f32),
}

impl Length {
    /// Full width of the container.
    pub const FULL: Self = Self::Percent(100.0);

    /// The raw numeric value, regardless of unit.
    #[inline]
    pub const fn value(self) -> f32 {
        match self {
            Self::Points(v) | Self::Percent(v) => v,
        }
    }

    /// Whether the value is finite and non-negative.
    #[inline]
    pub fn is_valid(self) -> bool {
        let v = self.value();
        v.is_finite() && v >= 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(v) => write!(f, "{v}"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Error parsing a [`Length`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLengthError {
    input: String,
}

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid length {:?}: expected a number or a percentage like \"100%\"",
            self.input
        )
    }
}

impl std::error::Error for ParseLengthError {}

impl FromStr for Length {
    type Err = ParseLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseLengthError {
            input: s.to_string(),
        };
        if let Some(pct) = trimmed.strip_suffix('%') {
            pct.trim().parse().map(Self::Percent).map_err(|_| err())
        } else {
            trimmed
                .strip_suffix("px")
                .unwrap_or(trimmed)
                .trim()
                .parse()
                .map(Self::Points)
                .map_err(|_| err())
        }
    }
}

/// Wire shape: bare numbers are points, strings may carry a `%` suffix.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f32),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<LengthRepr> for Length {
    type Error = ParseLengthError;

    fn try_from(repr: LengthRepr) -> Result<Self, Self::Error> {
        match repr {
            LengthRepr::Number(v) => Ok(Self::Points(v)),
            LengthRepr::Text(s) => s.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Length> for LengthRepr {
    fn from(len: Length) -> Self {
        match len {
            Length::Points(v) => Self::Number(v),
            Length::Percent(_) => Self::Text(len.to_string()),
        }
    }
}

/// Cross-axis alignment of the container within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlignSelf {
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

/// Main-axis direction of the container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl fmt::Display for AlignSelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::Stretch => "stretch",
        })
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        })
    }
}

/// A sparse container style record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CanvasStyle {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub width: Option<Length>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_width: Option<Length>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub align_self: Option<AlignSelf>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub flex_direction: Option<FlexDirection>,
}

impl CanvasStyle {
    /// An empty record (all properties unset).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: None,
            max_width: None,
            align_self: None,
            flex_direction: None,
        }
    }

    /// A record that only caps the width at `points`.
    #[must_use]
    pub const fn with_max_width_points(points: f32) -> Self {
        Self::new().max_width(Length::Points(points))
    }

    #[must_use]
    pub const fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn max_width(mut self, max_width: Length) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub const fn align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = Some(align_self);
        self
    }

    #[must_use]
    pub const fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    /// Whether no property is set.
    pub const fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.max_width.is_none()
            && self.align_self.is_none()
            && self.flex_direction.is_none()
    }

    /// Cascade `other` over `self`: properties set on `other` win.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            width: other.width.or(self.width),
            max_width: other.max_width.or(self.max_width),
            align_self: other.align_self.or(self.align_self),
            flex_direction: other.flex_direction.or(self.flex_direction),
        }
    }

    /// Whether every length in the record is finite and non-negative.
    pub fn lengths_valid(&self) -> bool {
        [self.width, self.max_width]
            .into_iter()
            .flatten()
            .all(Length::is_valid)
    }
}

impl fmt::Display for CanvasStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        let mut field = |f: &mut fmt::Formatter<'_>, name: &str, value: &dyn fmt::Display| {
            let sep = if first { " " } else { ", " };
            first = false;
            write!(f, "{sep}{name}: {value}")
        };
        if let Some(v) = &self.width {
            field(f, "width", v)?;
        }
        if let Some(v) = &self.max_width {
            field(f, "max-width", v)?;
        }
        if let Some(v) = &self.align_self {
            field(f, "align-self", v)?;
        }
        if let Some(v) = &self.flex_direction {
            field(f, "flex-direction", v)?;
        }
        if self.is_empty() {
            write!(f, "}}")
        } else {
            write!(f, " }}")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
