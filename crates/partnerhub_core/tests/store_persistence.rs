use partnerhub_core::model::program::Program;
use partnerhub_core::model::snapshot::SNAPSHOT_SCHEMA_VERSION;
use partnerhub_core::{
    MemoryBackend, PrototypeStore, SnapshotBackend, SnapshotCache, SqliteBackend, StoreConfig,
    DEFAULT_STORAGE_KEY,
};

fn unseeded() -> StoreConfig {
    StoreConfig {
        seed_on_first_load: false,
        ..StoreConfig::default()
    }
}

#[test]
fn malformed_document_loads_as_empty() {
    let backend = MemoryBackend::new();
    backend.put_raw(DEFAULT_STORAGE_KEY, "{\"programs\": [ {\"id\": ");
    let store = PrototypeStore::new(backend, unseeded());

    assert!(store.load().is_empty());
}

#[test]
fn unexpected_shape_loads_as_empty() {
    let backend = MemoryBackend::new();
    backend.put_raw(DEFAULT_STORAGE_KEY, r#"{"programs": "not a list"}"#);
    let store = PrototypeStore::new(backend, unseeded());

    assert!(store.load().is_empty());
}

#[test]
fn future_schema_document_loads_as_empty() {
    let backend = MemoryBackend::new();
    backend.put_raw(
        DEFAULT_STORAGE_KEY,
        &format!(r#"{{"schemaVersion": {}, "programs": []}}"#, SNAPSHOT_SCHEMA_VERSION + 1),
    );
    let store = PrototypeStore::new(backend, unseeded());

    assert!(store.load().is_empty());
}

#[test]
fn legacy_document_is_migrated_on_load() {
    let backend = MemoryBackend::new();
    backend.put_raw(
        DEFAULT_STORAGE_KEY,
        r#"{
            "partners": [{ "id": "partner-a", "name": "Alpha", "type": "ngo" }],
            "programResources": [{ "id": "r1", "title": "Guide", "ownerId": "partner-a" }]
        }"#,
    );
    let store = PrototypeStore::new(backend.clone(), unseeded());

    let snapshot = store.load();
    assert_eq!(snapshot.partners.len(), 1);
    assert_eq!(snapshot.resources[0].id, "r1");

    store.create(Program::new("partner-a", "Ocean Lab")).unwrap();
    let rewritten = backend.read(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(rewritten.contains("\"resources\""));
    assert!(!rewritten.contains("programResources"));
}

#[test]
fn write_after_corruption_starts_from_empty_snapshot() {
    let backend = MemoryBackend::new();
    backend.put_raw(DEFAULT_STORAGE_KEY, "garbage");
    let store = PrototypeStore::new(backend, unseeded());

    store.create(Program::new("partner-a", "Ocean Lab")).unwrap();
    assert_eq!(store.load().programs.len(), 1);
}

#[test]
fn custom_storage_key_isolates_documents() {
    let backend = MemoryBackend::new();
    let default_store = PrototypeStore::new(backend.clone(), unseeded());
    let other_config = unseeded().with_storage_key("partnerhub.sandbox").unwrap();
    let other_store = PrototypeStore::new(backend, other_config);

    other_store
        .create(Program::new("partner-a", "Sandbox"))
        .unwrap();

    assert!(default_store.load().is_empty());
    assert_eq!(other_store.load().programs.len(), 1);
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prototype.db");

    let created = {
        let store = PrototypeStore::new(SqliteBackend::open(&path).unwrap(), unseeded());
        store.create(Program::new("partner-a", "Ocean Lab")).unwrap()
    };

    let reopened = PrototypeStore::new(SqliteBackend::open(&path).unwrap(), unseeded());
    assert_eq!(reopened.get::<Program>(&created.id), Some(created));
}

#[test]
fn sqlite_write_from_other_connection_refreshes_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prototype.db");

    let writer = PrototypeStore::new(SqliteBackend::open(&path).unwrap(), unseeded());
    let reader = PrototypeStore::new(SqliteBackend::open(&path).unwrap(), unseeded());
    let mut cache = SnapshotCache::mount(&reader);
    assert!(!cache.refresh_if_stale());

    writer
        .create(Program::new("partner-a", "Ocean Lab"))
        .unwrap();

    assert!(cache.refresh_if_stale());
    assert_eq!(cache.snapshot().programs.len(), 1);
}

#[test]
fn concurrent_writers_last_write_wins() {
    let backend = MemoryBackend::new();
    let first_tab = PrototypeStore::new(backend.clone(), unseeded());
    let second_tab = PrototypeStore::new(backend, unseeded());

    let stale_view = first_tab.load();
    second_tab
        .create(Program::new("partner-a", "From second tab"))
        .unwrap();

    // A whole-document write from a stale view drops the other tab's row.
    first_tab
        .backend()
        .write(DEFAULT_STORAGE_KEY, &stale_view.to_document().unwrap())
        .unwrap();
    assert!(second_tab.load().programs.is_empty());
}
