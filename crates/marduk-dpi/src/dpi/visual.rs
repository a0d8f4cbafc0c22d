use crate::coords::Matrix;

use super::DpiScale;

/// A visual that can report how it is being presented.
///
/// Implemented by whatever window/visual abstraction the host provides.
/// Both queries read live platform state and must be called on the thread
/// that owns the visual.
pub trait DpiVisual {
    /// Device transform of the render surface hosting this visual.
    ///
    /// Returns `None` while the visual is not attached to a render surface
    /// (for example before its window is shown).
    fn render_transform(&self) -> Option<Matrix>;

    /// Current per-axis DPI scale as reported by the platform.
    fn dpi_scale(&self) -> DpiScale;
}

/// A top-level window, queried through its root visual.
pub trait DpiWindow {
    fn root_visual(&self) -> &dyn DpiVisual;
}
