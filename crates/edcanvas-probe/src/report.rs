use std::fmt::Write as _;

use edcanvas_core::{Orientation, Viewport};
use edcanvas_layout::{Alignment, AlignmentBreakpoints, resolve_margins, resolve_wide};
use edcanvas_style::{CanvasStyle, CanvasStyleSheet};
use serde::Serialize;

/// Everything `resolve` prints, in one serializable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginReport {
    pub viewport: Viewport,
    pub orientation: Orientation,
    pub align: Option<Alignment>,
    pub reversed: bool,
    /// Which wide rule fired; only present for wide alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wide_rule: Option<&'static str>,
    pub base: Option<CanvasStyle>,
    pub alignment: Option<CanvasStyle>,
    pub effective: CanvasStyle,
}

impl MarginReport {
    #[must_use]
    pub fn build(
        viewport: Viewport,
        align: Option<Alignment>,
        reversed: bool,
        breakpoints: &AlignmentBreakpoints,
        sheet: &CanvasStyleSheet,
    ) -> Self {
        let margins = resolve_margins(align, reversed, viewport, breakpoints, sheet);
        let effective = margins.effective();
        let owned = margins.into_owned();
        Self {
            viewport,
            orientation: viewport.orientation(),
            align,
            reversed,
            wide_rule: (align == Some(Alignment::Wide))
                .then(|| resolve_wide(viewport, breakpoints).label()),
            base: owned.base,
            alignment: owned.alignment,
            effective,
        }
    }

    /// Human-readable rendering.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let style = |s: &Option<CanvasStyle>| {
            s.map_or_else(|| "(none)".to_string(), |s| s.to_string())
        };
        let _ = writeln!(out, "viewport:   {} ({})", self.viewport, self.orientation);
        let _ = writeln!(
            out,
            "align:      {}{}",
            self.align.map_or("(unset)", Alignment::token),
            if self.reversed { ", reversed" } else { "" }
        );
        if let Some(rule) = self.wide_rule {
            let _ = writeln!(out, "wide rule:  {rule}");
        }
        let _ = writeln!(out, "base:       {}", style(&self.base));
        let _ = writeln!(out, "alignment:  {}", style(&self.alignment));
        let _ = writeln!(out, "effective:  {}", self.effective);
        out
    }
}
