#![forbid(unsafe_code)]

//! Canvas configuration as data.
//!
//! [`CanvasConfig`] bundles the wide-alignment breakpoints and the canvas
//! style sheet so hosts can tune them without recompiling.
//!
//! # Loading
//!
//! ```toml
//! # edcanvas.toml
//! [breakpoints]
//! small = 680
//! medium = 768
//! wide = 820
//! large = 1024
//!
//! [styles.wide-medium]
//! max_width = 770
//!
//! [styles.full]
//! max_width = "100%"
//! ```
//!
//! ```no_run
//! # fn main() -> Result<(), edcanvas_runtime::CanvasConfigError> {
//! use edcanvas_runtime::CanvasConfig;
//!
//! let config = CanvasConfig::from_toml_file("edcanvas.toml")?;
//! # let _ = config;
//! # Ok(())
//! # }
//! ```
//!
//! # Defaults
//!
//! Omitted sections keep their built-in values. A `[styles]` table is
//! overlaid on the built-in sheet slot by slot, so a file only needs the
//! slots it changes.

#[cfg(feature = "canvas-config")]
use std::path::Path;

use edcanvas_layout::AlignmentBreakpoints;
use edcanvas_style::CanvasStyleSheet;

/// Breakpoints and styles for the editor canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanvasConfig {
    /// Wide-alignment width thresholds.
    pub breakpoints: AlignmentBreakpoints,
    /// Canvas and alignment style records.
    pub styles: CanvasStyleSheet,
}

/// On-disk shape: `styles` is an overlay, not a replacement.
#[cfg(feature = "canvas-config")]
#[derive(serde::Serialize, serde::Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct CanvasConfigFile {
    breakpoints: AlignmentBreakpoints,
    styles: Option<CanvasStyleSheet>,
}

#[cfg(feature = "canvas-config")]
impl From<CanvasConfigFile> for CanvasConfig {
    fn from(file: CanvasConfigFile) -> Self {
        let defaults = CanvasStyleSheet::default();
        Self {
            breakpoints: file.breakpoints,
            styles: match file.styles {
                Some(overlay) => defaults.overlay(&overlay),
                None => defaults,
            },
        }
    }
}

impl CanvasConfig {
    /// Load from a TOML string.
    #[cfg(feature = "canvas-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, CanvasConfigError> {
        toml::from_str::<CanvasConfigFile>(s)
            .map(Self::from)
            .map_err(CanvasConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "canvas-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CanvasConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CanvasConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "canvas-config")]
    pub fn from_json_str(s: &str) -> Result<Self, CanvasConfigError> {
        serde_json::from_str::<CanvasConfigFile>(s)
            .map(Self::from)
            .map_err(CanvasConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "canvas-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CanvasConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CanvasConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Load from a file, picking the format by extension (`.json` is JSON,
    /// anything else TOML), then validate.
    #[cfg(feature = "canvas-config")]
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, CanvasConfigError> {
        let path = path.as_ref();
        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.into_validated()
    }

    /// Serialize the full configuration (every populated slot) as TOML.
    #[cfg(feature = "canvas-config")]
    pub fn to_toml_string(&self) -> Result<String, CanvasConfigError> {
        let file = CanvasConfigFile {
            breakpoints: self.breakpoints,
            styles: Some(self.styles.clone()),
        };
        toml::to_string_pretty(&file).map_err(CanvasConfigError::TomlSer)
    }

    /// Validate all parameters.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.breakpoints.validate();
        for (slot, style) in self.styles.iter() {
            if !style.lengths_valid() {
                errors.push(format!(
                    "styles.{slot} has a negative or non-finite length: {style}"
                ));
            }
        }
        errors
    }

    /// Consume `self`, failing with [`CanvasConfigError::Validation`] if
    /// [`validate`](Self::validate) reports anything.
    pub fn into_validated(self) -> Result<Self, CanvasConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(count = errors.len(), "canvas config rejected");
            Err(CanvasConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`CanvasConfig`].
#[derive(Debug)]
pub enum CanvasConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "canvas-config")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "canvas-config")]
    TomlSer(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "canvas-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for CanvasConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "canvas-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "canvas-config")]
            Self::TomlSer(e) => write!(f, "TOML serialization error: {e}"),
            #[cfg(feature = "canvas-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for CanvasConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "canvas-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "canvas-config")]
            Self::TomlSer(e) => Some(e),
            #[cfg(feature = "canvas-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use edcanvas_style::{CanvasStyle, Length, StyleSlot};

    #[test]
    fn default_is_valid() {
        assert!(CanvasConfig::default().validate().is_empty());
        assert!(CanvasConfig::default().into_validated().is_ok());
    }

    #[test]
    fn negative_style_length_is_reported() {
        let mut config = CanvasConfig::default();
        config
            .styles
            .set(StyleSlot::WideMedium, CanvasStyle::with_max_width_points(-1.0));
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("styles.wide-medium"), "{errors:?}");
    }

    #[test]
    fn into_validated_wraps_errors() {
        let config = CanvasConfig {
            breakpoints: AlignmentBreakpoints::new(800.0, 700.0, 820.0, 1024.0),
            ..CanvasConfig::default()
        };
        match config.into_validated() {
            Err(CanvasConfigError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn validation_error_display_joins_messages() {
        let err = CanvasConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn empty_toml_is_default() {
        let config = CanvasConfig::from_toml_str("").unwrap();
        assert_eq!(config, CanvasConfig::default());
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn toml_overrides_breakpoints_and_overlays_styles() {
        let config = CanvasConfig::from_toml_str(
            r#"
            [breakpoints]
            large = 1280

            [styles.wide-landscape]
            max_width = 900

            [styles.center]
            align_self = "center"
            "#,
        )
        .unwrap();
        assert_eq!(config.breakpoints.large, 1280.0);
        assert_eq!(config.breakpoints.small, 680.0);
        assert_eq!(
            config.styles.get(StyleSlot::WideLandscape),
            Some(&CanvasStyle::with_max_width_points(900.0))
        );
        assert!(config.styles.contains(StyleSlot::Center));
        // Untouched slots keep their built-in values.
        assert_eq!(
            config.styles.get(StyleSlot::Full).and_then(|s| s.max_width),
            Some(Length::FULL)
        );
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn unknown_top_level_key_is_rejected() {
        let err = CanvasConfig::from_toml_str("[margins]\nsmall = 1\n").unwrap_err();
        assert!(matches!(err, CanvasConfigError::Toml(_)));
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn unknown_slot_is_rejected() {
        let err = CanvasConfig::from_json_str(r#"{"styles": {"justify": {}}}"#).unwrap_err();
        assert!(matches!(err, CanvasConfigError::Json(_)));
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn misspelled_style_field_is_rejected() {
        // Style fields are snake_case while slot names are kebab-case.
        let err = CanvasConfig::from_toml_str("[styles.full]\nmax-width = \"90%\"\n").unwrap_err();
        assert!(matches!(err, CanvasConfigError::Toml(_)));

        let err = CanvasConfig::from_json_str(r#"{"styles": {"canvas": {"maxWidth": 600}}}"#)
            .unwrap_err();
        assert!(matches!(err, CanvasConfigError::Json(_)));
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn misspelled_breakpoint_is_rejected() {
        let err = CanvasConfig::from_toml_str("[breakpoints]\nlargee = 1280\n").unwrap_err();
        assert!(matches!(err, CanvasConfigError::Toml(_)));
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn json_loading() {
        let config = CanvasConfig::from_json_str(
            r#"{"breakpoints": {"small": 600}, "styles": {"full": {"max_width": "90%"}}}"#,
        )
        .unwrap();
        assert_eq!(config.breakpoints.small, 600.0);
        assert_eq!(
            config.styles.get(StyleSlot::Full).and_then(|s| s.max_width),
            Some(Length::Percent(90.0))
        );
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn toml_round_trip() {
        let text = CanvasConfig::default().to_toml_string().unwrap();
        assert!(text.contains("[breakpoints]"));
        let back = CanvasConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, CanvasConfig::default());
    }

    #[cfg(feature = "canvas-config")]
    #[test]
    fn load_validated_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("canvas.json");
        std::fs::write(&json, r#"{"breakpoints": {"wide": 900}}"#).unwrap();
        assert_eq!(CanvasConfig::load_validated(&json).unwrap().breakpoints.wide, 900.0);

        let toml_path = dir.path().join("canvas.toml");
        std::fs::write(&toml_path, "[breakpoints]\nwide = 2000\n").unwrap();
        match CanvasConfig::load_validated(&toml_path) {
            Err(CanvasConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("breakpoints.wide")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            CanvasConfig::load_validated(&missing),
            Err(CanvasConfigError::Io(_))
        ));
    }
}
