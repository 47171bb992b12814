//! Remote store gateway
//!
//! The core never talks to a concrete backend directly; the reconciler and
//! startup loader only see the [`RemoteStore`] trait.

mod http;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use http::HttpRemoteStore;

/// One color document as stored remotely.
///
/// A record missing `hex` defaults to white; a missing `timestamp` defaults
/// to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRecord {
    #[serde(default = "default_hex")]
    pub hex: String,
    #[serde(default)]
    pub timestamp: String,
}

fn default_hex() -> String {
    "#FFFFFF".to_string()
}

/// Trait for remote color collection access (async)
///
/// No transactional or batch guarantee holds across multiple `create_one`
/// calls; each call succeeds or fails independently.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Fetch every record in the remote collection
    async fn list_all(&self) -> Result<Vec<RemoteRecord>>;

    /// Create one record in the remote collection
    async fn create_one(&self, hex: &str, timestamp: &str) -> Result<()>;
}
