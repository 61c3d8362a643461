#![forbid(unsafe_code)]

//! edcanvas runtime
//!
//! Glue between the host's window/state providers and the pure layout code.
//!
//! # Key Components
//!
//! - [`ViewportObservable`] - the host's viewport-size provider, notifying
//!   listeners of size changes and logging orientation flips
//! - [`EditorCanvasMargins`] - re-resolves canvas margins on viewport or prop
//!   changes, skipping unchanged inputs
//! - [`EditFocusSwitcher`] - toggles between editing a post and its template
//! - [`CanvasConfig`] - breakpoints and style sheet, loadable from TOML/JSON
//!
//! # How it fits in the system
//! `edcanvas-layout` owns the margin rules; this crate decides *when* to run
//! them and holds the results for the presentation layer.

pub mod canvas_config;
pub mod canvas_margins;
pub mod edit_focus;
pub mod viewport;

pub use canvas_config::{CanvasConfig, CanvasConfigError};
pub use canvas_margins::{CanvasMarginProps, EditorCanvasMargins};
pub use edit_focus::{
    EditFocus, EditFocusSwitcher, EditSiteStore, EntityRecords, FocusButton, InfoNotice,
    NoticeAction, NoticeActionButton, NoticeKind, Notices, PostContext, PostRecord, RecordState,
    SwitcherView,
};
pub use viewport::{Subscription, ViewportObservable};
