//! Color entry model

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::remote::RemoteRecord;

/// A color captured during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Normalized color code, `#` followed by 3 or 6 hex digits
    pub hex: String,
    /// Creation timestamp, `DD-MM-YYYY HH:mm:ss`
    pub created_at: String,
    /// `false` on local creation, `true` once confirmed on the remote store
    pub synced: bool,
}

impl ColorEntry {
    /// Create a locally-picked entry, not yet synced.
    ///
    /// The caller is responsible for validating `hex` with [`is_valid_hex`]
    /// before constructing the entry.
    #[must_use]
    pub fn new_local(hex: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            created_at: created_at.into(),
            synced: false,
        }
    }

    /// Map a remote record to an entry that is already synced.
    #[must_use]
    pub fn from_remote(record: RemoteRecord) -> Self {
        Self {
            hex: record.hex,
            created_at: record.timestamp,
            synced: true,
        }
    }
}

/// Validate a color string.
///
/// Accepts exactly a `#` followed by 6 or 3 hexadecimal digits
/// (case-insensitive), nothing else. The 3-digit short form is accepted
/// as-is, not expanded.
///
/// # Examples
///
/// ```
/// use swatch_core::is_valid_hex;
///
/// assert!(is_valid_hex("#FF0000"));
/// assert!(is_valid_hex("#abc"));
/// assert!(!is_valid_hex("FF0000"));
/// ```
#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    let re = Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("Invalid regex");
    re.is_match(hex)
}
