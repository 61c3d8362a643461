#![forbid(unsafe_code)]

//! Content alignment tokens.

use std::fmt;

use edcanvas_style::StyleSlot;

/// How block content is positioned or sized within the canvas.
///
/// "No alignment" is represented as `Option::<Alignment>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Alignment {
    Left,
    Center,
    Right,
    Wide,
    Full,
}

impl Alignment {
    /// All alignments.
    pub const ALL: [Self; 5] = [Self::Left, Self::Center, Self::Right, Self::Wide, Self::Full];

    /// Token as used in block attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Wide => "wide",
            Self::Full => "full",
        }
    }

    /// Parse a block-attribute token. Unknown tokens yield `None`, which the
    /// resolver treats the same as no alignment.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.token() == token)
    }

    /// The sheet slot holding this alignment's fixed style.
    ///
    /// `Wide` maps to [`StyleSlot::Wide`] for completeness, but the margin
    /// resolver computes wide styles from the viewport instead.
    pub const fn fixed_slot(self) -> StyleSlot {
        match self {
            Self::Left => StyleSlot::Left,
            Self::Center => StyleSlot::Center,
            Self::Right => StyleSlot::Right,
            Self::Wide => StyleSlot::Wide,
            Self::Full => StyleSlot::Full,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
