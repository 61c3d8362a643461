#![forbid(unsafe_code)]

//! The host's viewport-size provider.
//!
//! A host window reports its size through [`ViewportObservable::resize`];
//! margin trackers and other layout consumers [`subscribe`] to hear about
//! sizes that differ from the last one. Each change bumps a version counter,
//! and a flip between landscape and portrait is logged at `debug` level so
//! rotation can be told apart from a plain resize in traces.
//!
//! [`subscribe`]: ViewportObservable::subscribe
//!
//! # Failure Modes
//!
//! - **Malformed sizes** (negative, `NaN`, infinite) are stored and forwarded
//!   with a `warn!`. The margin resolver treats them as "no wide style".
//! - **Leaked guards**: a [`Subscription`] kept alive forever keeps its
//!   callback registered. Entries whose guard was dropped are swept on the
//!   next change.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use edcanvas_core::{Orientation, Viewport};
use tracing::{debug, debug_span, warn};
use web_time::Instant;

type Listener = Rc<dyn Fn(Viewport)>;

struct ViewportState {
    current: Viewport,
    version: u64,
    listeners: Vec<Weak<dyn Fn(Viewport)>>,
}

/// Shared handle to the current viewport size.
///
/// Clones point at the same state, so the host can keep one handle for
/// `resize` and give others to consumers.
///
/// # Invariants
///
/// 1. `version` advances by 1 per `resize` that changes the size.
/// 2. Resizing to the current size notifies nobody.
/// 3. Listeners run in the order they subscribed.
#[derive(Clone)]
pub struct ViewportObservable {
    state: Rc<RefCell<ViewportState>>,
}

impl std::fmt::Debug for ViewportObservable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ViewportObservable")
            .field("current", &state.current)
            .field("version", &state.version)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl ViewportObservable {
    /// Start at `initial`, version 0.
    #[must_use]
    pub fn new(initial: Viewport) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewportState {
                current: initial,
                version: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// The last reported size.
    #[must_use]
    pub fn get(&self) -> Viewport {
        self.state.borrow().current
    }

    /// Orientation of the last reported size.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.get().orientation()
    }

    /// Record a new window size and notify listeners if it changed.
    ///
    /// Returns whether the size changed. Listeners may call `resize` again
    /// from inside their callback.
    pub fn resize(&self, viewport: Viewport) -> bool {
        let previous = {
            let mut state = self.state.borrow_mut();
            if state.current == viewport {
                return false;
            }
            let previous = state.current;
            state.current = viewport;
            state.version += 1;
            previous
        };

        if !viewport.is_well_formed() {
            warn!(%viewport, "malformed viewport reported");
        }
        let (from, to) = (previous.orientation(), viewport.orientation());
        if from != to {
            debug!(?from, ?to, %viewport, "viewport orientation changed");
        }

        self.notify(viewport);
        true
    }

    /// Call `listener` with every later size change.
    ///
    /// The current size is not replayed. Dropping the guard unsubscribes.
    pub fn subscribe(&self, listener: impl Fn(Viewport) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        self.state
            .borrow_mut()
            .listeners
            .push(Rc::downgrade(&listener));
        Subscription { _listener: listener }
    }

    /// Number of size changes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.state.borrow().version
    }

    /// Registered listeners, counting dropped ones not yet swept.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    fn notify(&self, viewport: Viewport) {
        // No borrow may be held while listeners run; they can resize.
        let (listeners, version) = {
            let mut state = self.state.borrow_mut();
            state.listeners.retain(|l| l.strong_count() > 0);
            let live: Vec<Listener> = state.listeners.iter().filter_map(Weak::upgrade).collect();
            (live, state.version)
        };
        if listeners.is_empty() {
            return;
        }

        let start = Instant::now();
        let _span = debug_span!(
            "viewport.notify",
            version,
            width = viewport.width,
            height = viewport.height,
            listeners = listeners.len() as u64
        )
        .entered();
        for listener in &listeners {
            listener(viewport);
        }
        debug!(
            duration_us = start.elapsed().as_micros() as u64,
            "viewport listeners notified"
        );
    }
}

/// Keeps a viewport listener registered while alive.
pub struct Subscription {
    _listener: Listener,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
