#![forbid(unsafe_code)]

//! Viewport-width thresholds for wide alignment.

use std::fmt;

/// Width thresholds (in points) that switch wide-alignment styles.
///
/// Expected ordering is `small < medium < wide < large`. The margin resolver
/// does not check it; see [`AlignmentBreakpoints::validate`] for callers that
/// load thresholds from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AlignmentBreakpoints {
    /// Phones in portrait. Not read by the margin resolver.
    pub mobile: f32,
    /// At or below this width, wide content tracks the viewport width.
    pub small: f32,
    /// Lower bound (inclusive) of the medium wide band.
    pub medium: f32,
    /// Upper bound (exclusive) of the medium wide band.
    pub wide: f32,
    /// Landscape viewports strictly wider than this use the landscape style.
    pub large: f32,
}

impl AlignmentBreakpoints {
    /// Built-in thresholds.
    pub const DEFAULT: Self = Self {
        mobile: 480.0,
        small: 680.0,
        medium: 768.0,
        wide: 820.0,
        large: 1024.0,
    };

    /// Create thresholds; `mobile` keeps its default.
    #[must_use]
    pub const fn new(small: f32, medium: f32, wide: f32, large: f32) -> Self {
        Self {
            mobile: Self::DEFAULT.mobile,
            small,
            medium,
            wide,
            large,
        }
    }

    /// Set the mobile threshold (builder pattern).
    #[must_use]
    pub const fn with_mobile(mut self, mobile: f32) -> Self {
        self.mobile = mobile;
        self
    }

    /// Check the thresholds.
    ///
    /// Returns a list of problems; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let named = [
            ("mobile", self.mobile),
            ("small", self.small),
            ("medium", self.medium),
            ("wide", self.wide),
            ("large", self.large),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "breakpoints.{name} must be finite and >= 0, got {value}"
                ));
            }
        }
        for pair in named[1..].windows(2) {
            let (lo_name, lo) = pair[0];
            let (hi_name, hi) = pair[1];
            if lo >= hi {
                errors.push(format!(
                    "breakpoints.{lo_name} ({lo}) must be < breakpoints.{hi_name} ({hi})"
                ));
            }
        }
        if self.mobile > self.small {
            errors.push(format!(
                "breakpoints.mobile ({}) must be <= breakpoints.small ({})",
                self.mobile, self.small
            ));
        }
        errors
    }
}

impl Default for AlignmentBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for AlignmentBreakpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mobile={} small={} medium={} wide={} large={}",
            self.mobile, self.small, self.medium, self.wide, self.large
        )
    }
}
