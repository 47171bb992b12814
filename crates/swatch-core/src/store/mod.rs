//! In-session color entry store

use crate::models::ColorEntry;

/// Insertion-ordered collection of color entries for one session.
///
/// Entries are never removed or edited after creation; the only mutation
/// besides append is the batch synced-flag flip applied after a sync pass.
#[derive(Debug, Default, Clone)]
pub struct ColorStore {
    entries: Vec<ColorEntry>,
}

impl ColorStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Replace the store contents with entries loaded at startup.
    pub fn seed(&mut self, entries: Vec<ColorEntry>) {
        self.entries = entries;
    }

    /// Append a locally-picked color as an unsynced entry.
    ///
    /// The caller must have validated `hex` already; the store performs no
    /// validation of its own.
    pub fn append(&mut self, hex: impl Into<String>, timestamp: impl Into<String>) {
        self.entries.push(ColorEntry::new_local(hex, timestamp));
    }

    /// Number of entries not yet confirmed on the remote store
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.synced).count()
    }

    /// Flip every currently-unsynced entry to synced.
    ///
    /// Batch operation applied after a sync pass that dispatched calls,
    /// regardless of per-call failures.
    pub fn mark_synced_where_unsynced(&mut self) {
        for entry in &mut self.entries {
            if !entry.synced {
                entry.synced = true;
            }
        }
    }

    /// Read view over all entries, in insertion order
    #[must_use]
    pub fn all(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Total number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
