#![forbid(unsafe_code)]

//! End-to-end margin tracking: a host pushes viewport changes through a
//! `ViewportObservable`, the tracker re-resolves, and every resolution is
//! traced under a `canvas.margins.resolve` span.
//!
//! Run:
//!   cargo test -p edcanvas-runtime --test margin_tracking

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use edcanvas_core::Viewport;
use edcanvas_layout::Alignment;
use edcanvas_runtime::{
    CanvasConfig, CanvasMarginProps, EditorCanvasMargins, ViewportObservable,
};
use edcanvas_style::Length;
use tracing_subscriber::layer::SubscriberExt;

/// A captured span with its recorded fields.
#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_spans(run: impl FnOnce()) -> Vec<CapturedSpan> {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SpanCapture {
        spans: Arc::clone(&spans),
    });
    tracing::subscriber::with_default(subscriber, run);
    let captured = spans.lock().unwrap().clone();
    captured
}

fn resolve_spans(spans: &[CapturedSpan]) -> Vec<&CapturedSpan> {
    spans
        .iter()
        .filter(|s| s.name == "canvas.margins.resolve")
        .collect()
}

#[test]
fn rotation_sequence_resolves_each_distinct_viewport() {
    let spans = with_captured_spans(|| {
        let viewport = ViewportObservable::new(Viewport::new(800.0, 600.0));
        let margins = EditorCanvasMargins::new(
            &viewport,
            CanvasMarginProps::aligned(Alignment::Wide),
            Rc::new(CanvasConfig::default()),
        );

        let expected = [
            (Viewport::new(1194.0, 834.0), Some(Length::Points(662.0))),
            // Portrait iPad: between wide and large, no rule applies.
            (Viewport::new(834.0, 1194.0), None),
            (Viewport::new(320.0, 600.0), Some(Length::Points(320.0))),
            (Viewport::new(800.0, 600.0), Some(Length::Points(770.0))),
        ];
        for (v, max_width) in expected {
            viewport.resize(v);
            assert_eq!(
                margins.margins().alignment.and_then(|s| s.max_width),
                max_width,
                "at {v}"
            );
        }
        // Same value again: no notification, no resolution.
        viewport.resize(Viewport::new(800.0, 600.0));
        assert_eq!(margins.version(), 5);
    });

    let resolves = resolve_spans(&spans);
    assert_eq!(resolves.len(), 5);
    assert_eq!(resolves[0].fields.get("align").map(String::as_str), Some("wide"));
    assert_eq!(resolves[0].fields.get("reversed").map(String::as_str), Some("false"));
    assert!(spans.iter().any(|s| s.name == "viewport.notify"));
}

#[test]
fn props_without_alignment_trace_none() {
    let spans = with_captured_spans(|| {
        let viewport = ViewportObservable::new(Viewport::new(640.0, 960.0));
        let margins = EditorCanvasMargins::new(
            &viewport,
            CanvasMarginProps::from_token(Some("center"), false),
            Rc::new(CanvasConfig::default()),
        );
        margins.set_props(CanvasMarginProps::from_token(None, true));
        assert_eq!(margins.margins().alignment, None);
    });

    let resolves = resolve_spans(&spans);
    assert_eq!(resolves.len(), 2);
    assert_eq!(resolves[0].fields.get("align").map(String::as_str), Some("center"));
    assert_eq!(resolves[1].fields.get("align").map(String::as_str), Some("none"));
    assert_eq!(resolves[1].fields.get("reversed").map(String::as_str), Some("true"));
}

#[test]
fn trackers_share_one_viewport() {
    let viewport = ViewportObservable::new(Viewport::new(800.0, 600.0));
    let config = Rc::new(CanvasConfig::default());
    let wide = EditorCanvasMargins::new(
        &viewport,
        CanvasMarginProps::aligned(Alignment::Wide),
        Rc::clone(&config),
    );
    let full = EditorCanvasMargins::new(
        &viewport,
        CanvasMarginProps::aligned(Alignment::Full),
        config,
    );

    viewport.resize(Viewport::new(320.0, 600.0));
    assert_eq!(
        wide.margins().alignment.and_then(|s| s.max_width),
        Some(Length::Points(320.0))
    );
    assert_eq!(
        full.margins().alignment.and_then(|s| s.max_width),
        Some(Length::FULL)
    );
    assert_eq!(wide.version(), 2);
    assert_eq!(full.version(), 2);
}
