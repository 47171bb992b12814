//! Sync reconciliation
//!
//! One sync pass pushes every unsynced entry to the remote store with one
//! independent create call per entry, concurrently dispatched. The pass
//! waits for every call to resolve, tallies successes and failures, and
//! never retries: a failed write is reported once and then forgotten.

use futures::future::join_all;

use crate::models::ColorEntry;
use crate::remote::RemoteStore;
use crate::store::ColorStore;

/// Tally of one sync pass.
///
/// `{0, 0}` arises only when nothing was dispatched ("nothing to sync"):
/// failed writes are still marked synced locally, so a later pass can never
/// re-dispatch them and produce a zero/zero tally any other way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Number of create calls that succeeded
    pub synced_count: usize,
    /// Number of create calls that failed
    pub failed_count: usize,
}

impl SyncOutcome {
    /// Whether the pass dispatched any remote calls
    #[must_use]
    pub const fn dispatched(&self) -> bool {
        self.synced_count + self.failed_count > 0
    }
}

/// Run one sync pass over `entries`.
///
/// Dispatches one `create_one` per unsynced entry, concurrently and
/// independently, and waits for all of them; there is no ordering guarantee
/// between calls, no timeout, and no retry. Returns `{0, 0}` without any
/// remote call when no entry is unsynced.
pub async fn sync_entries<R: RemoteStore>(remote: &R, entries: &[ColorEntry]) -> SyncOutcome {
    let unsynced: Vec<&ColorEntry> = entries.iter().filter(|entry| !entry.synced).collect();

    if unsynced.is_empty() {
        return SyncOutcome::default();
    }

    let results = join_all(
        unsynced
            .iter()
            .map(|entry| remote.create_one(&entry.hex, &entry.created_at)),
    )
    .await;

    let mut outcome = SyncOutcome::default();
    for result in results {
        match result {
            Ok(()) => outcome.synced_count += 1,
            Err(error) => {
                tracing::warn!("Error pushing color to remote store: {error}");
                outcome.failed_count += 1;
            }
        }
    }
    outcome
}

/// Run one sync pass over the store and reconcile local state.
///
/// When the pass dispatched anything, every previously-unsynced entry is
/// marked synced afterward, including entries whose remote write failed.
/// The tally stays accurate while local state does not; revisit with the
/// product owner before changing this.
pub async fn run_sync<R: RemoteStore>(remote: &R, store: &mut ColorStore) -> SyncOutcome {
    let outcome = sync_entries(remote, store.all()).await;
    if outcome.dispatched() {
        store.mark_synced_where_unsynced();
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{Error, Result};
    use crate::remote::RemoteRecord;

    /// Remote double that fails `create_one` for a configured set of hex
    /// values and counts every call. Failures are keyed by hex because
    /// concurrent dispatch has no call order.
    struct ScriptedRemote {
        fail_hexes: HashSet<String>,
        calls: AtomicUsize,
    }

    impl ScriptedRemote {
        fn new<const N: usize>(fail_hexes: [&str; N]) -> Self {
            Self {
                fail_hexes: fail_hexes.iter().map(ToString::to_string).collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RemoteStore for ScriptedRemote {
        async fn list_all(&self) -> Result<Vec<RemoteRecord>> {
            Ok(Vec::new())
        }

        async fn create_one(&self, hex: &str, _timestamp: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_hexes.contains(hex) {
                Err(Error::RemoteWrite(format!("rejected {hex}")))
            } else {
                Ok(())
            }
        }
    }

    fn store_with_unsynced(hexes: &[&str]) -> ColorStore {
        let mut store = ColorStore::new();
        for (index, hex) in hexes.iter().enumerate() {
            store.append(*hex, format!("01-01-2026 12:00:0{index}"));
        }
        store
    }

    #[tokio::test]
    async fn sync_with_nothing_pending_makes_no_calls() {
        let remote = ScriptedRemote::new([]);
        let mut store = ColorStore::new();
        store.seed(vec![ColorEntry {
            hex: "#abc".to_string(),
            created_at: "01-01-2026 12:00:00".to_string(),
            synced: true,
        }]);

        let outcome = run_sync(&remote, &mut store).await;

        assert_eq!(outcome, SyncOutcome::default());
        assert!(!outcome.dispatched());
        assert_eq!(remote.call_count(), 0);
    }

    #[tokio::test]
    async fn sync_tallies_successes_and_failures() {
        let remote = ScriptedRemote::new(["#222222"]);
        let mut store = store_with_unsynced(&["#111111", "#222222", "#333333"]);

        let outcome = run_sync(&remote, &mut store).await;

        assert_eq!(outcome.synced_count, 2);
        assert_eq!(outcome.failed_count, 1);
        assert_eq!(remote.call_count(), 3);
    }

    #[tokio::test]
    async fn sync_marks_all_unsynced_even_after_failures() {
        let remote = ScriptedRemote::new(["#222222"]);
        let mut store = store_with_unsynced(&["#111111", "#222222", "#333333"]);

        run_sync(&remote, &mut store).await;

        assert!(store.all().iter().all(|entry| entry.synced));
        assert_eq!(store.pending_count(), 0);
    }

    #[tokio::test]
    async fn sync_skips_already_synced_entries() {
        let remote = ScriptedRemote::new([]);
        let mut store = store_with_unsynced(&["#111111"]);
        store.mark_synced_where_unsynced();
        store.append("#222222", "01-01-2026 12:00:05");

        let outcome = run_sync(&remote, &mut store).await;

        assert_eq!(outcome.synced_count, 1);
        assert_eq!(outcome.failed_count, 0);
        assert_eq!(remote.call_count(), 1);
    }

    #[tokio::test]
    async fn second_pass_after_failures_is_a_noop() {
        let remote = ScriptedRemote::new(["#111111", "#222222"]);
        let mut store = store_with_unsynced(&["#111111", "#222222"]);

        let first = run_sync(&remote, &mut store).await;
        assert_eq!(first.synced_count, 0);
        assert_eq!(first.failed_count, 2);
        assert!(first.dispatched());

        // Failed writes were still marked synced, so nothing is re-dispatched.
        let second = run_sync(&remote, &mut store).await;
        assert_eq!(second, SyncOutcome::default());
        assert_eq!(remote.call_count(), 2);
    }

    #[tokio::test]
    async fn all_failed_pass_is_distinct_from_nothing_to_sync() {
        let remote = ScriptedRemote::new(["#111111"]);
        let mut store = store_with_unsynced(&["#111111"]);

        let outcome = run_sync(&remote, &mut store).await;

        assert_eq!(outcome.synced_count, 0);
        assert_eq!(outcome.failed_count, 1);
        assert!(outcome.dispatched());
    }
}
