use super::{Point, Size};

/// Rectangle stored as two opposite corners.
///
/// Transforms map each corner on its own and never reorder them, so a
/// rectangle may come out with negative width or height. Call
/// [`Rect::normalized`] when a well-ordered rectangle is required.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub const fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            right: bottom_right.x,
            bottom: bottom_right.y,
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    #[inline]
    pub const fn top_left(self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub const fn bottom_right(self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Signed width; negative when the corners are swapped horizontally.
    #[inline]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    /// Signed height; negative when the corners are swapped vertically.
    #[inline]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Reorders the corners so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        Rect::new(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(l: f64, t: f64, rt: f64, b: f64) -> Rect {
        Rect::new(l, t, rt, b)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_origin_size_sets_far_corner() {
        let rect = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(rect, r(10.0, 20.0, 40.0, 60.0));
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn from_corners_keeps_order() {
        // Swapped corners are stored as given, not reordered.
        let rect = Rect::from_corners(Point::new(5.0, 5.0), Point::new(1.0, 2.0));
        assert_eq!(rect.top_left(), Point::new(5.0, 5.0));
        assert_eq!(rect.bottom_right(), Point::new(1.0, 2.0));
        assert_eq!(rect.width(), -4.0);
        assert_eq!(rect.height(), -3.0);
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_ordered_is_identity() {
        let rect = r(1.0, 2.0, 11.0, 22.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, 6.0, 5.0).normalized();
        assert_eq!(n.left, 6.0);
        assert_eq!(n.width(), 4.0);
    }

    #[test]
    fn normalized_negative_height() {
        let n = r(0.0, 10.0, 5.0, 7.0).normalized();
        assert_eq!(n.top, 7.0);
        assert_eq!(n.height(), 3.0);
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_swapped_corners() {
        assert!(r(5.0, 5.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
