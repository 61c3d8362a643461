#![forbid(unsafe_code)]

//! Geometric primitives.

use std::fmt;

/// Screen orientation derived from a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    /// Width is at least the height (square counts as landscape).
    Landscape,
    /// Height exceeds width.
    Portrait,
}

/// Window dimensions as reported by the host, in device-independent points.
///
/// A viewport is a plain value: it is supplied at query time and never held
/// or mutated by the resolvers that read it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the viewport is landscape (`width >= height`).
    #[inline]
    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }

    /// Whether the viewport is portrait (`width < height`).
    #[inline]
    pub fn is_portrait(&self) -> bool {
        !self.is_landscape()
    }

    /// Classify the viewport orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        if self.is_landscape() {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Whether both dimensions are finite and non-negative.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl From<(f32, f32)> for Viewport {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn landscape_and_portrait() {
        assert!(Viewport::new(800.0, 600.0).is_landscape());
        assert!(Viewport::new(600.0, 800.0).is_portrait());
        assert_eq!(
            Viewport::new(1194.0, 834.0).orientation(),
            Orientation::Landscape
        );
        assert_eq!(
            Viewport::new(320.0, 600.0).orientation(),
            Orientation::Portrait
        );
    }

    #[test]
    fn square_is_landscape() {
        let v = Viewport::new(700.0, 700.0);
        assert!(v.is_landscape());
        assert!(!v.is_portrait());
    }

    #[test]
    fn well_formed() {
        assert!(Viewport::new(0.0, 0.0).is_well_formed());
        assert!(!Viewport::new(-1.0, 10.0).is_well_formed());
        assert!(!Viewport::new(f32::NAN, 10.0).is_well_formed());
        assert!(!Viewport::new(10.0, f32::INFINITY).is_well_formed());
    }

    #[test]
    fn display_format() {
        assert_eq!(Viewport::new(800.0, 600.0).to_string(), "800x600");
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
    }

    #[test]
    fn from_tuple() {
        let v: Viewport = (1194.0, 834.0).into();
        assert_eq!(v.width, 1194.0);
        assert_eq!(v.height, 834.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Viewport::new(320.0, 600.0)).unwrap();
        assert_eq!(json, r#"{"width":320.0,"height":600.0}"#);
        let back: Viewport = serde_json::from_str(r#"{"width":320,"height":600}"#).unwrap();
        assert_eq!(back, Viewport::new(320.0, 600.0));
    }

    proptest! {
        #[test]
        fn swapping_axes_flips_orientation_unless_square(
            w in 0.0f32..4096.0,
            h in 0.0f32..4096.0,
        ) {
            let v = Viewport::new(w, h);
            let swapped = Viewport::new(h, w);
            prop_assert_ne!(v.is_landscape(), v.is_portrait());
            if w == h {
                prop_assert!(v.is_landscape() && swapped.is_landscape());
            } else {
                prop_assert_ne!(v.orientation(), swapped.orientation());
            }
        }
    }
}
