//! Paint model.
//!
//! Colors are straight-alpha floats. Vertices carry them packed as ABGR bytes.

pub mod color;

pub use color::Color;
