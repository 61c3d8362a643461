#![forbid(unsafe_code)]

//! Core: viewport geometry and logging plumbing for the editor canvas.
//!
//! # Role in edcanvas
//! `edcanvas-core` is the input vocabulary. It owns the [`Viewport`] type that
//! window-size providers report and the logging facade every other crate
//! logs through.
//!
//! # Primary responsibilities
//! - **Viewport**: window dimensions in device-independent points.
//! - **Orientation**: landscape/portrait classification (square is landscape).
//! - **Logging**: `tracing` macro re-exports, or no-op stand-ins when the
//!   `tracing` feature is off.
//!
//! # How it fits in the system
//! `edcanvas-layout` resolves canvas margins from a [`Viewport`];
//! `edcanvas-runtime` tracks viewport changes and re-runs the resolver.

pub mod geometry;
pub mod logging;

pub use geometry::{Orientation, Viewport};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
