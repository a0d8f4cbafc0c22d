//! DPI scale values, the visual capability, and DPI mode configuration.

mod config;
mod scale;
mod visual;

pub use config::{DpiConfig, DpiMode, DPI_MODE_ENV};
pub use scale::DpiScale;
pub use visual::{DpiVisual, DpiWindow};

/// Logical units per inch.
pub const LOGICAL_DPI: f64 = 96.0;
