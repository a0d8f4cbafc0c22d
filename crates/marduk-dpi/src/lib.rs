//! DPI-aware coordinate conversion between logical and device space.
//!
//! Logical space is resolution independent (96 units per inch); device space
//! is the physical pixel grid of a display surface. Conversions are pure
//! diagonal scales driven by per-axis DPI factors, plus a DPI query against
//! a host-provided visual.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Point`, `Rect`, `Size`, `Thickness`, `Matrix` |
//! | [`dpi`] | `DpiScale`, `DpiVisual`, `DpiWindow`, `DpiMode`, `DpiConfig` |
//! | [`scaler`] | logical <-> device conversions and DPI queries |
//! | [`error`] | `ConfigError` |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use marduk_dpi::{device_to_logical, logical_to_device, Point, Rect};
//!
//! let device = logical_to_device(Point::new(10.0, 20.0), 1.5, 2.0);
//! assert_eq!(device, Point::new(15.0, 40.0));
//!
//! let logical = device_to_logical(Rect::new(0.0, 0.0, 192.0, 96.0), 2.0, 2.0);
//! assert_eq!(logical, Rect::new(0.0, 0.0, 96.0, 48.0));
//! ```

pub mod coords;
pub mod dpi;
pub mod error;
pub mod logging;
pub mod scaler;

mod platform;

pub use coords::{Matrix, Point, Rect, Size, Thickness};
pub use dpi::{DpiConfig, DpiMode, DpiScale, DpiVisual, DpiWindow, LOGICAL_DPI};
pub use error::ConfigError;
pub use scaler::{
    device_to_logical, get_dpi, get_dpi_for_window, logical_to_device, transform_to_device_x,
    transform_to_device_y, visual_to_device_x, visual_to_device_y, DeviceToLogical,
    LogicalToDevice,
};
