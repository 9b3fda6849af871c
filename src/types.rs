//! Strongly-typed numeric primitives for spherebase.
//!
//! Parameter values are checked through [`Length`]; the layout math then works
//! on raw `f64` millimetres and `glam::DVec2` points in output space (origin
//! top-left, y down).

use std::fmt;

use glam::DVec2;

/// A point in output space (mm, y increasing downward)
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in millimetres (the drawing's canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_new(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }
}

/// Stroke colors used on the cutting sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

/// Axis-aligned bounding box in output space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include a circle
    pub fn expand_circle(&mut self, center: Point, radius: f64) {
        self.expand_point(center - DVec2::splat(radius));
        self.expand_point(center + DVec2::splat(radius));
    }

    /// Whether the box lies within `[0, width] x [0, height]`
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.is_empty()
            || (self.min.x >= 0.0 && self.min.y >= 0.0 && self.max.x <= width && self.max.y <= height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn length_try_positive_valid() {
        assert_eq!(Length::try_positive(2.5), Ok(Length(2.5)));
    }

    #[test]
    fn length_try_positive_rejects_zero_and_negative() {
        assert_eq!(Length::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Length::try_positive(-1.0), Err(NumericError::Negative));
    }

    #[test]
    fn length_try_new_rejects_nan_and_infinity() {
        assert_eq!(Length::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Length::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Length::try_positive(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn length_try_new_allows_negative() {
        assert_eq!(Length::try_new(-1.0), Ok(Length(-1.0)));
    }

    #[test]
    fn color_renders_as_hex() {
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert_eq!(Color::RED.to_string(), "#FF0000");
    }

    #[test]
    fn bbox_new_is_empty() {
        let bbox = BBox::new();
        assert!(bbox.is_empty());
        assert!(bbox.fits_within(1.0, 1.0));
    }

    #[test]
    fn bbox_expand_and_fit() {
        let mut bbox = BBox::new();
        bbox.expand_point(dvec2(3.0, 3.0));
        bbox.expand_circle(dvec2(50.0, 40.0), 10.0);
        assert_eq!(bbox.min, dvec2(3.0, 3.0));
        assert_eq!(bbox.max, dvec2(60.0, 50.0));
        assert!(bbox.fits_within(400.0, 300.0));
        assert!(!bbox.fits_within(55.0, 300.0));
    }
}
