#![forbid(unsafe_code)]

//! Canvas margin resolution.
//!
//! [`resolve_margins`] turns `(alignment, reversed, viewport, breakpoints,
//! sheet)` into a [`CanvasMargins`] pair: the container style and the
//! alignment style. It is a pure function; callers that want to skip
//! recomputation for unchanged inputs cache the result themselves.
//!
//! # Wide alignment
//!
//! Wide content is sized from the viewport, first match wins:
//!
//! | Rule | Condition                                   | Style                        |
//! |------|---------------------------------------------|------------------------------|
//! | 1    | landscape and `width > large`               | [`StyleSlot::WideLandscape`] |
//! | 2    | `width <= small`                            | `max_width = width`          |
//! | 3    | `medium <= width < wide`                    | [`StyleSlot::WideMedium`]    |
//! | 4    | anything else                               | none                         |
//!
//! # Invariants
//!
//! 1. `base` depends only on `reversed`.
//! 2. Non-wide alignments read their fixed slot; `None` alignment reads nothing.
//! 3. Identical inputs give equal outputs.
//!
//! # Failure Modes
//!
//! None. Missing sheet slots, unordered breakpoints and NaN dimensions all
//! fall through to an absent style.

use std::borrow::Cow;

use edcanvas_core::geometry::Viewport;
use edcanvas_style::{CanvasStyle, CanvasStyleSheet, Length, StyleSlot};

use crate::alignment::Alignment;
use crate::breakpoints::AlignmentBreakpoints;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome of the wide-alignment rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WideResolution {
    /// Rule 1: large landscape viewport.
    Landscape,
    /// Rule 2: small viewport, content tracks the viewport width.
    Narrow { max_width: f32 },
    /// Rule 3: medium band.
    Medium,
    /// Rule 4: no wide style applies.
    Unstyled,
}

impl WideResolution {
    /// The alignment style this resolution selects from `sheet`.
    #[must_use]
    pub fn style(self, sheet: &CanvasStyleSheet) -> Option<Cow<'_, CanvasStyle>> {
        match self {
            Self::Landscape => sheet.get(StyleSlot::WideLandscape).map(Cow::Borrowed),
            Self::Narrow { max_width } => Some(Cow::Owned(
                CanvasStyle::new().max_width(Length::Points(max_width)),
            )),
            Self::Medium => sheet.get(StyleSlot::WideMedium).map(Cow::Borrowed),
            Self::Unstyled => None,
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Narrow { .. } => "narrow",
            Self::Medium => "medium",
            Self::Unstyled => "unstyled",
        }
    }
}

/// The resolved `(base, alignment)` style pair, borrowing from the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasMargins<'a> {
    /// Container style: the canvas or reversed-canvas record.
    pub base: Option<&'a CanvasStyle>,
    /// Alignment style: a fixed record, a computed record, or nothing.
    pub alignment: Option<Cow<'a, CanvasStyle>>,
}

impl CanvasMargins<'_> {
    /// Detach from the sheet.
    #[must_use]
    pub fn into_owned(self) -> ResolvedMargins {
        ResolvedMargins {
            base: self.base.copied(),
            alignment: self.alignment.map(Cow::into_owned),
        }
    }

    /// The alignment style cascaded over the base style.
    #[must_use]
    pub fn effective(&self) -> CanvasStyle {
        cascade(self.base, self.alignment.as_deref())
    }
}

/// Owned form of [`CanvasMargins`], for holding across sheet lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedMargins {
    pub base: Option<CanvasStyle>,
    pub alignment: Option<CanvasStyle>,
}

impl ResolvedMargins {
    /// The alignment style cascaded over the base style.
    #[must_use]
    pub fn effective(&self) -> CanvasStyle {
        cascade(self.base.as_ref(), self.alignment.as_ref())
    }

    /// The pair as an array, in application order.
    #[must_use]
    pub fn as_array(&self) -> [Option<&CanvasStyle>; 2] {
        [self.base.as_ref(), self.alignment.as_ref()]
    }
}

fn cascade(base: Option<&CanvasStyle>, alignment: Option<&CanvasStyle>) -> CanvasStyle {
    let base = base.copied().unwrap_or_default();
    match alignment {
        Some(alignment) => base.merge(alignment),
        None => base,
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Apply the wide-alignment rules to a viewport.
#[must_use]
pub fn resolve_wide(viewport: Viewport, breakpoints: &AlignmentBreakpoints) -> WideResolution {
    let width = viewport.width;
    if viewport.is_landscape() && width > breakpoints.large {
        WideResolution::Landscape
    } else if width <= breakpoints.small {
        WideResolution::Narrow { max_width: width }
    } else if width >= breakpoints.medium && width < breakpoints.wide {
        WideResolution::Medium
    } else {
        WideResolution::Unstyled
    }
}

/// Resolve the canvas container and alignment styles.
///
/// `align = None` applies no alignment style. `reversed` only selects the
/// container record.
#[must_use]
pub fn resolve_margins<'a>(
    align: Option<Alignment>,
    reversed: bool,
    viewport: Viewport,
    breakpoints: &AlignmentBreakpoints,
    sheet: &'a CanvasStyleSheet,
) -> CanvasMargins<'a> {
    let base = sheet.get(if reversed {
        StyleSlot::CanvasReversed
    } else {
        StyleSlot::Canvas
    });

    let alignment = match align {
        Some(Alignment::Wide) => {
            let wide = resolve_wide(viewport, breakpoints);
            edcanvas_core::trace!(
                width = viewport.width,
                height = viewport.height,
                rule = wide.label(),
                "wide alignment resolved"
            );
            wide.style(sheet)
        }
        Some(other) => sheet.get(other.fixed_slot()).map(Cow::Borrowed),
        None => None,
    };

    CanvasMargins { base, alignment }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
