use super::Point;

/// 2D affine transform in row-vector convention.
///
/// ```text
/// | m11       m12       0 |
/// | m21       m22       0 |
/// | offset_x  offset_y  1 |
/// ```
///
/// Render surfaces report their device transform as a `Matrix`; the DPI
/// conversions only ever build diagonal scale matrices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Diagonal scale matrix.
    #[inline]
    pub const fn from_scale(scale_x: f64, scale_y: f64) -> Self {
        Self { m11: scale_x, m22: scale_y, ..Self::IDENTITY }
    }

    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Appends a scale to this transform.
    ///
    /// Entries that are exactly zero stay zero, so a non-finite factor
    /// cannot turn them into NaN.
    #[inline]
    pub fn scale(&mut self, scale_x: f64, scale_y: f64) {
        self.m11 = scale_entry(self.m11, scale_x);
        self.m21 = scale_entry(self.m21, scale_x);
        self.offset_x = scale_entry(self.offset_x, scale_x);
        self.m12 = scale_entry(self.m12, scale_y);
        self.m22 = scale_entry(self.m22, scale_y);
        self.offset_y = scale_entry(self.offset_y, scale_y);
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        if self.m12 == 0.0 && self.m21 == 0.0 {
            // No cross terms: a non-finite coordinate stays on its own axis.
            return Point::new(
                p.x * self.m11 + self.offset_x,
                p.y * self.m22 + self.offset_y,
            );
        }

        Point::new(
            p.x * self.m11 + p.y * self.m21 + self.offset_x,
            p.x * self.m12 + p.y * self.m22 + self.offset_y,
        )
    }
}

#[inline]
fn scale_entry(v: f64, s: f64) -> f64 {
    if v == 0.0 { v } else { v * s }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
