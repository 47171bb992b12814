//! swatch-core - Core library for Swatch
//!
//! This crate contains the color entry model, the in-session entry store,
//! the remote store gateway, and the sync reconciliation logic used by the
//! Swatch front-ends.

pub mod error;
pub mod models;
pub mod remote;
pub mod startup;
pub mod store;
pub mod sync;
pub mod util;

pub use error::{Error, Result};
pub use models::{is_valid_hex, ColorEntry};
pub use store::ColorStore;
pub use sync::SyncOutcome;
