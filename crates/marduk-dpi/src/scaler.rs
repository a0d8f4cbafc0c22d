//! Logical <-> device conversions.
//!
//! Every conversion is a diagonal scale: no rotation, no translation, no
//! rounding to whole pixels. Scale factors are not validated; zero or
//! negative factors produce infinite, NaN or sign-flipped results following
//! IEEE-754 arithmetic.

use crate::coords::{Matrix, Point, Rect, Size, Thickness};
use crate::dpi::{DpiConfig, DpiScale, DpiVisual, DpiWindow, LOGICAL_DPI};

/// Values that can be mapped from logical units to device pixels.
pub trait LogicalToDevice: Sized {
    fn logical_to_device(self, scale_x: f64, scale_y: f64) -> Self;
}

/// Values that can be mapped from device pixels back to logical units.
///
/// [`Thickness`] deliberately has no implementation.
pub trait DeviceToLogical: Sized {
    fn device_to_logical(self, scale_x: f64, scale_y: f64) -> Self;
}

#[inline]
pub fn logical_to_device<T: LogicalToDevice>(value: T, scale_x: f64, scale_y: f64) -> T {
    value.logical_to_device(scale_x, scale_y)
}

#[inline]
pub fn device_to_logical<T: DeviceToLogical>(value: T, scale_x: f64, scale_y: f64) -> T {
    value.device_to_logical(scale_x, scale_y)
}

/// Scratch transform, rebuilt from identity on every call.
#[inline]
fn scale_transform(scale_x: f64, scale_y: f64) -> Matrix {
    let mut m = Matrix::identity();
    m.scale(scale_x, scale_y);
    m
}

impl LogicalToDevice for Point {
    #[inline]
    fn logical_to_device(self, scale_x: f64, scale_y: f64) -> Self {
        scale_transform(scale_x, scale_y).transform_point(self)
    }
}

impl DeviceToLogical for Point {
    #[inline]
    fn device_to_logical(self, scale_x: f64, scale_y: f64) -> Self {
        Point::new(self.x / scale_x, self.y / scale_y)
    }
}

// Rects go corner by corner so both corners stay consistent with the point
// transform under non-uniform scales.
impl LogicalToDevice for Rect {
    #[inline]
    fn logical_to_device(self, scale_x: f64, scale_y: f64) -> Self {
        Rect::from_corners(
            self.top_left().logical_to_device(scale_x, scale_y),
            self.bottom_right().logical_to_device(scale_x, scale_y),
        )
    }
}

impl DeviceToLogical for Rect {
    #[inline]
    fn device_to_logical(self, scale_x: f64, scale_y: f64) -> Self {
        Rect::from_corners(
            self.top_left().device_to_logical(scale_x, scale_y),
            self.bottom_right().device_to_logical(scale_x, scale_y),
        )
    }
}

impl LogicalToDevice for Size {
    #[inline]
    fn logical_to_device(self, scale_x: f64, scale_y: f64) -> Self {
        let p = Point::new(self.width, self.height).logical_to_device(scale_x, scale_y);
        Size::new(p.x, p.y)
    }
}

impl DeviceToLogical for Size {
    #[inline]
    fn device_to_logical(self, scale_x: f64, scale_y: f64) -> Self {
        let p = Point::new(self.width, self.height).device_to_logical(scale_x, scale_y);
        Size::new(p.x, p.y)
    }
}

impl LogicalToDevice for Thickness {
    #[inline]
    fn logical_to_device(self, scale_x: f64, scale_y: f64) -> Self {
        let tl = Point::new(self.left, self.top).logical_to_device(scale_x, scale_y);
        let br = Point::new(self.right, self.bottom).logical_to_device(scale_x, scale_y);
        Thickness::new(tl.x, tl.y, br.x, br.y)
    }
}

// ── scalar ────────────────────────────────────────────────────────────────

/// One-axis conversion: `value * scale_x / 96`.
///
/// `scale_x` is in device pixels per 96 logical units, i.e. the DPI scale
/// times 96 (or simply the device DPI).
#[inline]
pub fn transform_to_device_x(value: f64, scale_x: f64) -> f64 {
    value * scale_x / LOGICAL_DPI
}

/// One-axis conversion: `value * scale_y / 96`. See [`transform_to_device_x`].
#[inline]
pub fn transform_to_device_y(value: f64, scale_y: f64) -> f64 {
    value * scale_y / LOGICAL_DPI
}

/// Converts `value` using the live device transform of `visual`'s render
/// surface (its `m11`).
///
/// Falls back to [`transform_to_device_x`] with `fallback_scale_x` when the
/// visual is not attached to a render surface.
pub fn visual_to_device_x<V: DpiVisual + ?Sized>(
    visual: &V,
    value: f64,
    fallback_scale_x: f64,
) -> f64 {
    match visual.render_transform() {
        Some(m) => value * m.m11,
        None => {
            log::trace!("visual not attached; x fallback scale {fallback_scale_x}");
            transform_to_device_x(value, fallback_scale_x)
        }
    }
}

/// Y-axis counterpart of [`visual_to_device_x`], using `m22`.
pub fn visual_to_device_y<V: DpiVisual + ?Sized>(
    visual: &V,
    value: f64,
    fallback_scale_y: f64,
) -> f64 {
    match visual.render_transform() {
        Some(m) => value * m.m22,
        None => {
            log::trace!("visual not attached; y fallback scale {fallback_scale_y}");
            transform_to_device_y(value, fallback_scale_y)
        }
    }
}

// ── DPI queries ───────────────────────────────────────────────────────────

/// DPI scale of `visual` under the process-wide [`DpiConfig`].
#[inline]
pub fn get_dpi<V: DpiVisual + ?Sized>(visual: &V) -> DpiScale {
    DpiConfig::current().get_dpi(visual)
}

/// DPI scale of `window` under the process-wide [`DpiConfig`].
#[inline]
pub fn get_dpi_for_window<W: DpiWindow + ?Sized>(window: &W) -> DpiScale {
    DpiConfig::current().get_dpi_for_window(window)
}
