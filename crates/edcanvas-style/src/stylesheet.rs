#![forbid(unsafe_code)]

//! Slot-keyed style sheet for the canvas container.
//!
//! [`CanvasStyleSheet`] maps each [`StyleSlot`] to an optional
//! [`CanvasStyle`]. The key set is closed: a typo is a compile error, not a
//! silently missing style.
//!
//! # Invariants
//!
//! 1. Lookup never fails; an unset slot yields `None`.
//! 2. [`CanvasStyleSheet::default`] holds the built-in editor canvas styles.
//! 3. [`CanvasStyleSheet::empty`] holds nothing.
//!
//! # Failure Modes
//!
//! None. Missing slots are a normal outcome the caller must handle.

use std::fmt;

use tracing::trace;

use crate::style::{AlignSelf, CanvasStyle, FlexDirection, Length};

/// Named entries of a [`CanvasStyleSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StyleSlot {
    /// Default canvas container.
    Canvas,
    /// Canvas container for reversed (bottom-up) content.
    CanvasReversed,
    /// Left-aligned content.
    Left,
    /// Centered content.
    Center,
    /// Right-aligned content.
    Right,
    /// Full-width content.
    Full,
    /// Wide content at its widest; the margin resolver never reads it
    /// because wide alignment is computed from the viewport.
    Wide,
    /// Wide content on medium viewports.
    WideMedium,
    /// Wide content on large landscape viewports.
    WideLandscape,
}

impl StyleSlot {
    /// Number of slots.
    pub const COUNT: usize = 9;

    /// All slots in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Canvas,
        Self::CanvasReversed,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::Full,
        Self::Wide,
        Self::WideMedium,
        Self::WideLandscape,
    ];

    /// Stable kebab-case name, as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Canvas => "canvas",
            Self::CanvasReversed => "canvas-reversed",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Full => "full",
            Self::Wide => "wide",
            Self::WideMedium => "wide-medium",
            Self::WideLandscape => "wide-landscape",
        }
    }

    /// Look up a slot by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Built-in canvas max width in points.
pub const CANVAS_MAX_WIDTH: f32 = 580.0;
/// Built-in wide max width in points.
pub const WIDE_MAX_WIDTH: f32 = 1054.0;
/// Built-in wide max width on medium viewports.
pub const WIDE_MEDIUM_MAX_WIDTH: f32 = 770.0;
/// Built-in wide max width on large landscape viewports.
pub const WIDE_LANDSCAPE_MAX_WIDTH: f32 = 662.0;

/// A table of canvas styles indexed by [`StyleSlot`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "std::collections::BTreeMap<StyleSlot, CanvasStyle>",
        into = "std::collections::BTreeMap<StyleSlot, CanvasStyle>"
    )
)]
pub struct CanvasStyleSheet {
    /// Values indexed by `StyleSlot` ordinal.
    entries: [Option<CanvasStyle>; StyleSlot::COUNT],
}

impl CanvasStyleSheet {
    /// A sheet with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: [None; StyleSlot::COUNT],
        }
    }

    /// Get the style for a slot, if set.
    #[must_use]
    pub fn get(&self, slot: StyleSlot) -> Option<&CanvasStyle> {
        self.entries[slot as usize].as_ref()
    }

    /// Set the style for a slot (builder pattern).
    #[must_use]
    pub fn with(mut self, slot: StyleSlot, style: CanvasStyle) -> Self {
        self.set(slot, style);
        self
    }

    /// Set the style for a slot, returning the previous entry.
    pub fn set(&mut self, slot: StyleSlot, style: CanvasStyle) -> Option<CanvasStyle> {
        let previous = self.entries[slot as usize].replace(style);
        if previous.is_some() {
            trace!(slot = slot.name(), "style sheet entry replaced");
        }
        previous
    }

    /// Remove the style for a slot, returning it.
    pub fn remove(&mut self, slot: StyleSlot) -> Option<CanvasStyle> {
        self.entries[slot as usize].take()
    }

    /// Whether a slot has an entry.
    #[must_use]
    pub fn contains(&self, slot: StyleSlot) -> bool {
        self.entries[slot as usize].is_some()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no slot is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate populated slots in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleSlot, &CanvasStyle)> {
        StyleSlot::ALL
            .iter()
            .zip(self.entries.iter())
            .filter_map(|(&slot, e)| e.as_ref().map(|style| (slot, style)))
    }

    /// Overlay every populated slot of `other` onto a copy of `self`.
    ///
    /// Slots are replaced whole, not merged property by property.
    #[must_use]
    pub fn overlay(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (slot, style) in other.iter() {
            out.set(slot, *style);
        }
        out
    }
}

impl Default for CanvasStyleSheet {
    /// The editor's built-in canvas styles.
    fn default() -> Self {
        Self::empty()
            .with(
                StyleSlot::Canvas,
                CanvasStyle::new()
                    .width(Length::FULL)
                    .max_width(Length::Points(CANVAS_MAX_WIDTH))
                    .align_self(AlignSelf::Center),
            )
            .with(
                StyleSlot::CanvasReversed,
                CanvasStyle::new()
                    .flex_direction(FlexDirection::ColumnReverse)
                    .width(Length::FULL)
                    .max_width(Length::Points(CANVAS_MAX_WIDTH)),
            )
            .with(StyleSlot::Full, CanvasStyle::new().max_width(Length::FULL))
            .with(
                StyleSlot::Wide,
                CanvasStyle::with_max_width_points(WIDE_MAX_WIDTH),
            )
            .with(
                StyleSlot::WideMedium,
                CanvasStyle::with_max_width_points(WIDE_MEDIUM_MAX_WIDTH),
            )
            .with(
                StyleSlot::WideLandscape,
                CanvasStyle::with_max_width_points(WIDE_LANDSCAPE_MAX_WIDTH),
            )
    }
}

impl FromIterator<(StyleSlot, CanvasStyle)> for CanvasStyleSheet {
    fn from_iter<I: IntoIterator<Item = (StyleSlot, CanvasStyle)>>(iter: I) -> Self {
        let mut sheet = Self::empty();
        for (slot, style) in iter {
            sheet.set(slot, style);
        }
        sheet
    }
}

impl From<std::collections::BTreeMap<StyleSlot, CanvasStyle>> for CanvasStyleSheet {
    fn from(map: std::collections::BTreeMap<StyleSlot, CanvasStyle>) -> Self {
        map.into_iter().collect()
    }
}

impl From<CanvasStyleSheet> for std::collections::BTreeMap<StyleSlot, CanvasStyle> {
    fn from(sheet: CanvasStyleSheet) -> Self {
        sheet.iter().map(|(slot, style)| (slot, *style)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
