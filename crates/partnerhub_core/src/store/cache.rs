//! Loaded-snapshot cache for view consumers.
//!
//! A view mounts a [`SnapshotCache`], derives its view model from
//! [`SnapshotCache::snapshot`], and calls [`SnapshotCache::refresh_if_stale`]
//! when it wants to pick up writes. Same-context writes are detected through
//! the store revision, writes from other contexts through the backend change
//! marker. Neither carries data; both only trigger a full reload.

use crate::model::Snapshot;
use crate::store::{PrototypeStore, SnapshotBackend};
use log::{debug, warn};

pub struct SnapshotCache<'store, B: SnapshotBackend> {
    store: &'store PrototypeStore<B>,
    snapshot: Snapshot,
    seen_revision: u64,
    seen_marker: Option<u64>,
}

impl<'store, B: SnapshotBackend> SnapshotCache<'store, B> {
    /// Loads (seeding when configured) and remembers the current markers.
    pub fn mount(store: &'store PrototypeStore<B>) -> Self {
        let mut cache = Self {
            store,
            snapshot: Snapshot::default(),
            seen_revision: 0,
            seen_marker: None,
        };
        cache.snapshot = store.load_or_seed();
        cache.remember_markers();
        cache
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns whether a write happened since the last (re)load.
    pub fn is_stale(&self) -> bool {
        if self.store.revision() != self.seen_revision {
            return true;
        }
        self.current_marker() != self.seen_marker
    }

    /// Reloads when stale; returns whether a reload happened.
    pub fn refresh_if_stale(&mut self) -> bool {
        if !self.is_stale() {
            return false;
        }
        self.reload();
        true
    }

    /// Unconditionally re-reads the persisted snapshot.
    pub fn reload(&mut self) {
        self.snapshot = self.store.load();
        self.remember_markers();
        debug!(
            "event=cache_reload module=store status=ok revision={} empty={}",
            self.seen_revision,
            self.snapshot.is_empty()
        );
    }

    fn remember_markers(&mut self) {
        self.seen_revision = self.store.revision();
        self.seen_marker = self.current_marker();
    }

    fn current_marker(&self) -> Option<u64> {
        match self
            .store
            .backend()
            .change_marker(&self.store.config().storage_key)
        {
            Ok(marker) => Some(marker),
            Err(err) => {
                warn!(
                    "event=cache_marker module=store status=error error_code=change_marker_failed error={err}"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SnapshotCache;
    use crate::config::StoreConfig;
    use crate::model::program::Program;
    use crate::store::{MemoryBackend, PrototypeStore};

    fn unseeded_config() -> StoreConfig {
        StoreConfig {
            seed_on_first_load: false,
            ..StoreConfig::default()
        }
    }

    #[test]
    fn same_context_write_marks_cache_stale() {
        let store = PrototypeStore::new(MemoryBackend::new(), unseeded_config());
        let mut cache = SnapshotCache::mount(&store);
        assert!(cache.snapshot().is_empty());
        assert!(!cache.is_stale());

        store.create(Program::new("partner-a", "Ocean Lab")).unwrap();

        assert!(cache.refresh_if_stale());
        assert_eq!(cache.snapshot().programs.len(), 1);
        assert!(!cache.refresh_if_stale());
    }

    #[test]
    fn write_from_other_context_is_picked_up() {
        let backend = MemoryBackend::new();
        let other_tab = PrototypeStore::new(backend.clone(), unseeded_config());
        let this_tab = PrototypeStore::new(backend, unseeded_config());
        let mut cache = SnapshotCache::mount(&this_tab);

        other_tab
            .create(Program::new("partner-a", "Ocean Lab"))
            .unwrap();

        assert!(cache.refresh_if_stale());
        assert_eq!(cache.snapshot().programs[0].name, "Ocean Lab");
    }

    #[test]
    fn write_under_another_storage_key_leaves_cache_fresh() {
        let backend = MemoryBackend::new();
        let other = PrototypeStore::new(
            backend.clone(),
            unseeded_config()
                .with_storage_key("partnerhub.other-db")
                .unwrap(),
        );
        let this = PrototypeStore::new(backend, unseeded_config());
        let mut cache = SnapshotCache::mount(&this);

        other.create(Program::new("partner-a", "Ocean Lab")).unwrap();

        assert!(!cache.is_stale());
        assert!(!cache.refresh_if_stale());
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn mount_seeds_empty_store_when_configured() {
        let store = PrototypeStore::new(MemoryBackend::new(), StoreConfig::default());
        let cache = SnapshotCache::mount(&store);
        assert!(!cache.snapshot().programs.is_empty());
    }
}
