use std::fmt;

use super::LOGICAL_DPI;

/// Rendering scale of a visual relative to the 96-units-per-inch baseline.
///
/// `1.0` on an axis means one logical unit maps to one device pixel.
/// Pixels-per-inch and pixels-per-dip are derived on demand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DpiScale {
    scale_x: f64,
    scale_y: f64,
}

impl DpiScale {
    /// Unscaled (96 DPI on both axes).
    pub const IDENTITY: DpiScale = DpiScale { scale_x: 1.0, scale_y: 1.0 };

    #[inline]
    pub const fn new(scale_x: f64, scale_y: f64) -> Self {
        Self { scale_x, scale_y }
    }

    #[inline]
    pub const fn uniform(scale: f64) -> Self {
        Self { scale_x: scale, scale_y: scale }
    }

    /// Builds a scale from the device's pixels-per-inch on each axis.
    #[inline]
    pub fn from_pixels_per_inch(ppi_x: f64, ppi_y: f64) -> Self {
        Self::new(ppi_x / LOGICAL_DPI, ppi_y / LOGICAL_DPI)
    }

    #[inline]
    pub const fn scale_x(self) -> f64 {
        self.scale_x
    }

    #[inline]
    pub const fn scale_y(self) -> f64 {
        self.scale_y
    }

    /// Combined scale used by text rendering.
    ///
    /// This is the vertical scale, not a mean of both axes.
    #[inline]
    pub const fn pixels_per_dip(self) -> f64 {
        self.scale_y
    }

    #[inline]
    pub fn pixels_per_inch_x(self) -> f64 {
        LOGICAL_DPI * self.scale_x
    }

    #[inline]
    pub fn pixels_per_inch_y(self) -> f64 {
        LOGICAL_DPI * self.scale_y
    }

    /// Both factors finite and strictly positive.
    ///
    /// Conversions do not check this; callers that take scales from
    /// untrusted sources can.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.scale_x > 0.0
            && self.scale_y > 0.0
    }
}

impl Default for DpiScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for DpiScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.scale_x, self.scale_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(DpiScale::default(), DpiScale::IDENTITY);
        assert_eq!(DpiScale::IDENTITY.pixels_per_inch_x(), 96.0);
    }

    #[test]
    fn pixels_per_inch_per_axis() {
        let s = DpiScale::new(1.5, 2.0);
        assert_eq!(s.pixels_per_inch_x(), 144.0);
        assert_eq!(s.pixels_per_inch_y(), 192.0);
    }

    #[test]
    fn pixels_per_dip_is_vertical_scale() {
        let s = DpiScale::new(1.25, 2.0);
        assert_eq!(s.pixels_per_dip(), 2.0);
    }

    #[test]
    fn from_pixels_per_inch_divides_by_baseline() {
        let s = DpiScale::from_pixels_per_inch(144.0, 120.0);
        assert_eq!(s.scale_x(), 1.5);
        assert_eq!(s.scale_y(), 1.25);
    }

    #[test]
    fn is_valid_rejects_zero_negative_and_nan() {
        assert!(DpiScale::uniform(1.0).is_valid());
        assert!(!DpiScale::new(0.0, 1.0).is_valid());
        assert!(!DpiScale::new(1.0, -2.0).is_valid());
        assert!(!DpiScale::new(f64::NAN, 1.0).is_valid());
        assert!(!DpiScale::new(1.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn display_format() {
        assert_eq!(DpiScale::new(1.5, 2.0).to_string(), "1.5x2");
    }
}
