//! Startup loading of the remote color set.

use crate::models::ColorEntry;
use crate::remote::RemoteStore;

/// Fetch the remote color set for a new session.
///
/// Entries loaded from the remote store are already synced. A failed fetch
/// is logged and yields an empty set — startup never blocks or errors the
/// session.
pub async fn load_initial<R: RemoteStore>(remote: &R) -> Vec<ColorEntry> {
    match remote.list_all().await {
        Ok(records) => records.into_iter().map(ColorEntry::from_remote).collect(),
        Err(error) => {
            tracing::warn!("Error fetching colors from remote store: {error}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{Error, Result};
    use crate::remote::RemoteRecord;

    struct FixedRemote {
        records: Result<Vec<RemoteRecord>>,
    }

    impl RemoteStore for FixedRemote {
        async fn list_all(&self) -> Result<Vec<RemoteRecord>> {
            match &self.records {
                Ok(records) => Ok(records.clone()),
                Err(_) => Err(Error::RemoteList("listing unavailable".to_string())),
            }
        }

        async fn create_one(&self, _hex: &str, _timestamp: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_maps_records_to_synced_entries() {
        let remote = FixedRemote {
            records: Ok(vec![
                RemoteRecord {
                    hex: "#FF0000".to_string(),
                    timestamp: "01-01-2026 12:00:00".to_string(),
                },
                RemoteRecord {
                    hex: "#abc".to_string(),
                    timestamp: "02-01-2026 08:30:00".to_string(),
                },
            ]),
        };

        let entries = load_initial(&remote).await;

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.synced));
        assert_eq!(entries[0].hex, "#FF0000");
        assert_eq!(entries[1].created_at, "02-01-2026 08:30:00");
    }

    #[tokio::test]
    async fn load_swallows_remote_failure() {
        let remote = FixedRemote {
            records: Err(Error::RemoteList("listing unavailable".to_string())),
        };

        let entries = load_initial(&remote).await;
        assert!(entries.is_empty());
    }
}
