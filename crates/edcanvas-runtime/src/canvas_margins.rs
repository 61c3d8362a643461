#![forbid(unsafe_code)]

//! Live canvas margins for the editor.
//!
//! [`EditorCanvasMargins`] subscribes to the host's [`ViewportObservable`] and
//! re-runs [`resolve_margins`] whenever the viewport or its props change. The
//! last inputs are remembered so a notification that does not change them is
//! a no-op, and [`version`](EditorCanvasMargins::version) only advances when
//! a resolution actually ran.
//!
//! # Usage
//!
//! ```
//! use std::rc::Rc;
//!
//! use edcanvas_core::Viewport;
//! use edcanvas_layout::Alignment;
//! use edcanvas_runtime::{
//!     CanvasConfig, CanvasMarginProps, EditorCanvasMargins, ViewportObservable,
//! };
//!
//! let viewport = ViewportObservable::new(Viewport::new(800.0, 600.0));
//! let margins = EditorCanvasMargins::new(
//!     &viewport,
//!     CanvasMarginProps::aligned(Alignment::Wide),
//!     Rc::new(CanvasConfig::default()),
//! );
//! viewport.resize(Viewport::new(1194.0, 834.0));
//! assert_eq!(margins.version(), 2);
//! assert_eq!(margins.viewport(), Viewport::new(1194.0, 834.0));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use edcanvas_core::Viewport;
use edcanvas_layout::{Alignment, ResolvedMargins, resolve_margins};
use edcanvas_style::CanvasStyle;
use tracing::info_span;

use crate::canvas_config::CanvasConfig;
use crate::viewport::{Subscription, ViewportObservable};

/// Inputs to the margin resolver that come from the block, not the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasMarginProps {
    /// Content alignment; `None` applies no alignment style.
    pub align: Option<Alignment>,
    /// Whether the canvas lays content out bottom-up.
    pub reversed: bool,
}

impl CanvasMarginProps {
    /// Props with an alignment and `reversed = false`.
    #[must_use]
    pub const fn aligned(align: Alignment) -> Self {
        Self {
            align: Some(align),
            reversed: false,
        }
    }

    /// Set `reversed` (builder pattern).
    #[must_use]
    pub const fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Props parsed from a block-attribute token. Unknown tokens mean no
    /// alignment.
    #[must_use]
    pub fn from_token(token: Option<&str>, reversed: bool) -> Self {
        Self {
            align: token.and_then(Alignment::from_token),
            reversed,
        }
    }
}

struct MarginState {
    config: Rc<CanvasConfig>,
    viewport: Viewport,
    props: CanvasMarginProps,
    margins: ResolvedMargins,
    version: u64,
}

impl MarginState {
    fn new(config: Rc<CanvasConfig>, viewport: Viewport, props: CanvasMarginProps) -> Self {
        let mut state = Self {
            config,
            viewport,
            props,
            margins: ResolvedMargins::default(),
            version: 0,
        };
        state.recompute();
        state
    }

    /// Returns whether a recomputation happened.
    fn refresh(&mut self, viewport: Viewport, props: CanvasMarginProps) -> bool {
        if self.version > 0 && viewport == self.viewport && props == self.props {
            return false;
        }
        self.viewport = viewport;
        self.props = props;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        let _span = info_span!(
            "canvas.margins.resolve",
            width = self.viewport.width,
            height = self.viewport.height,
            align = self.props.align.map_or("none", Alignment::token),
            reversed = self.props.reversed,
        )
        .entered();
        self.margins = resolve_margins(
            self.props.align,
            self.props.reversed,
            self.viewport,
            &self.config.breakpoints,
            &self.config.styles,
        )
        .into_owned();
        self.version += 1;
    }
}

/// Canvas margins kept in sync with a [`ViewportObservable`].
///
/// Lives on the UI thread (`!Send`), like the viewport handle it watches.
pub struct EditorCanvasMargins {
    state: Rc<RefCell<MarginState>>,
    _subscription: Subscription,
}

impl std::fmt::Debug for EditorCanvasMargins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("EditorCanvasMargins")
            .field("viewport", &state.viewport)
            .field("props", &state.props)
            .field("margins", &state.margins)
            .field("version", &state.version)
            .finish()
    }
}

impl EditorCanvasMargins {
    /// Resolve margins for the current viewport and follow its changes.
    #[must_use]
    pub fn new(
        viewport: &ViewportObservable,
        props: CanvasMarginProps,
        config: Rc<CanvasConfig>,
    ) -> Self {
        let state = Rc::new(RefCell::new(MarginState::new(config, viewport.get(), props)));
        let watcher = Rc::clone(&state);
        let subscription = viewport.subscribe(move |v| {
            let mut state = watcher.borrow_mut();
            let props = state.props;
            state.refresh(v, props);
        });
        Self {
            state,
            _subscription: subscription,
        }
    }

    /// Replace the props, re-resolving if they changed.
    ///
    /// Returns whether a recomputation happened.
    pub fn set_props(&self, props: CanvasMarginProps) -> bool {
        let mut state = self.state.borrow_mut();
        let viewport = state.viewport;
        state.refresh(viewport, props)
    }

    /// The current `(base, alignment)` styles.
    #[must_use]
    pub fn margins(&self) -> ResolvedMargins {
        self.state.borrow().margins
    }

    /// The alignment style cascaded over the base style.
    #[must_use]
    pub fn effective_style(&self) -> CanvasStyle {
        self.state.borrow().margins.effective()
    }

    /// The viewport used by the last resolution.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    /// The props used by the last resolution.
    #[must_use]
    pub fn props(&self) -> CanvasMarginProps {
        self.state.borrow().props
    }

    /// Number of resolutions run so far (1 after construction).
    #[must_use]
    pub fn version(&self) -> u64 {
        self.state.borrow().version
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
