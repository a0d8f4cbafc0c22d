/// Offsets on all four edges (margin, padding, border).
///
/// Edges are independent values, not a vector; transforms treat
/// (left, top) and (right, bottom) as two separate points.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same offset on every edge.
    #[inline]
    pub const fn uniform(v: f64) -> Self {
        Self { left: v, top: v, right: v, bottom: v }
    }
}
