//! Data models for swatch-core

mod color;

pub use color::{is_valid_hex, ColorEntry};
