//! Adapters implementing the DPI visual capability for windowing backends.
//!
//! Each backend sits behind its cargo feature.

#[cfg(feature = "winit")]
mod winit;
