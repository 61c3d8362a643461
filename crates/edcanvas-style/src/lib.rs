#![forbid(unsafe_code)]

//! Style records for the editor canvas container.
//!
//! # Role in edcanvas
//! `edcanvas-style` is the shared vocabulary for canvas styling. The margin
//! resolver picks records out of a [`CanvasStyleSheet`]; the presentation
//! layer applies them in order with [`CanvasStyle::merge`].
//!
//! # This crate provides
//! - [`CanvasStyle`]: a sparse record of container properties.
//! - [`Length`]: points or percentage.
//! - [`StyleSlot`]: the closed set of sheet keys.
//! - [`CanvasStyleSheet`]: slot-indexed style table with built-in defaults.

/// Style records with cascading merge.
pub mod style;
/// Slot-keyed style sheet.
pub mod stylesheet;

pub use style::{AlignSelf, CanvasStyle, FlexDirection, Length, ParseLengthError};
pub use stylesheet::{CanvasStyleSheet, StyleSlot};
