#![forbid(unsafe_code)]

//! Responsive layout for the editor canvas.
//!
//! Given the current [`Viewport`], a content [`Alignment`] and whether the
//! canvas is reversed, [`resolve_margins`] picks the container style and the
//! alignment-specific style out of a [`CanvasStyleSheet`].
//!
//! ```
//! use edcanvas_layout::{
//!     Alignment, AlignmentBreakpoints, CanvasStyleSheet, StyleSlot, Viewport, resolve_margins,
//! };
//!
//! let sheet = CanvasStyleSheet::default();
//! let margins = resolve_margins(
//!     Some(Alignment::Wide),
//!     false,
//!     Viewport::new(800.0, 600.0),
//!     &AlignmentBreakpoints::default(),
//!     &sheet,
//! );
//! assert_eq!(margins.alignment.as_deref(), sheet.get(StyleSlot::WideMedium));
//! assert_eq!(margins.base, sheet.get(StyleSlot::Canvas));
//! ```

pub mod alignment;
pub mod breakpoints;
pub mod margins;

pub use alignment::Alignment;
pub use breakpoints::AlignmentBreakpoints;
pub use edcanvas_core::geometry::{Orientation, Viewport};
pub use edcanvas_style::{CanvasStyle, CanvasStyleSheet, StyleSlot};
pub use margins::{CanvasMargins, ResolvedMargins, WideResolution, resolve_margins, resolve_wide};
