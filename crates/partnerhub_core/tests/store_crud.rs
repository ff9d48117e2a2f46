use partnerhub_core::model::institution::InstitutionTeacher;
use partnerhub_core::model::program::{Program, ProgramVisibility};
use partnerhub_core::model::resource::ProgramResource;
use partnerhub_core::{
    MemoryBackend, PrototypeStore, SeedOutcome, Snapshot, StoreConfig, StoreError, Table,
};
use serde_json::{json, Map, Value};

fn store() -> PrototypeStore<MemoryBackend> {
    let config = StoreConfig {
        seed_on_first_load: false,
        ..StoreConfig::default()
    };
    PrototypeStore::new(MemoryBackend::new(), config)
}

fn patch(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        other => panic!("patch must be an object, got {other}"),
    }
}

#[test]
fn load_on_empty_backend_returns_default_snapshot() {
    let store = store();
    assert_eq!(store.load(), Snapshot::default());
}

#[test]
fn created_record_appears_exactly_once() {
    let store = store();
    let created = store
        .create(Program::new("partner-a", "Ocean Lab"))
        .unwrap();

    let snapshot = store.load();
    let matches = snapshot
        .programs
        .iter()
        .filter(|program| program.id == created.id)
        .count();
    assert_eq!(matches, 1);
    assert_eq!(store.get::<Program>(&created.id), Some(created));
}

#[test]
fn identical_inputs_produce_distinct_ids() {
    let store = store();
    let draft = InstitutionTeacher::new("inst-1", "program-1", "same@school.org");

    let first = store.create(draft.clone()).unwrap();
    let second = store.create(draft).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.list::<InstitutionTeacher>().len(), 2);
}

#[test]
fn create_preserves_insertion_order() {
    let store = store();
    let names = ["first", "second", "third"];
    for name in names {
        store.create(Program::new("partner-a", name)).unwrap();
    }

    let listed: Vec<String> = store
        .list::<Program>()
        .into_iter()
        .map(|program| program.name)
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn update_merges_fields_and_keeps_identity() {
    let store = store();
    let created = store
        .create(Program::new("partner-a", "Ocean Lab"))
        .unwrap();

    let updated = store
        .update::<Program>(
            &created.id,
            patch(json!({
                "name": "Ocean Lab 2",
                "visibility": "private",
                "id": "hijacked",
                "createdAt": 1
            })),
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Ocean Lab 2");
    assert_eq!(updated.visibility, ProgramVisibility::Private);
    assert_eq!(updated.partner_id, "partner-a");
    assert!(updated.updated_at.is_some());
    assert_eq!(store.get::<Program>(&created.id), Some(updated));
}

#[test]
fn update_of_missing_id_returns_none_and_leaves_table() {
    let store = store();
    store.create(Program::new("partner-a", "Ocean Lab")).unwrap();
    let before = store.load();

    let missing_program = store
        .update::<Program>("missing", patch(json!({ "name": "x" })))
        .unwrap();
    let missing_resource = store
        .update::<ProgramResource>("missing", patch(json!({ "title": "x" })))
        .unwrap();

    assert!(missing_program.is_none());
    assert!(missing_resource.is_none());
    assert_eq!(store.load(), before);
}

#[test]
fn patch_with_wrong_shape_is_rejected_without_writing() {
    let store = store();
    let created = store
        .create(Program::new("partner-a", "Ocean Lab"))
        .unwrap();
    let before = store.load();

    let err = store
        .update::<Program>(&created.id, patch(json!({ "visibility": "secret" })))
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::InvalidPatch { table: Table::Programs, .. }
    ));
    assert_eq!(store.load(), before);
}

#[test]
fn delete_reports_whether_a_row_was_removed() {
    let store = store();
    let created = store
        .create(Program::new("partner-a", "Ocean Lab"))
        .unwrap();

    assert!(!store.delete::<Program>("missing").unwrap());
    assert_eq!(store.load().programs.len(), 1);

    assert!(store.delete::<Program>(&created.id).unwrap());
    assert!(store.load().programs.is_empty());
}

#[test]
fn seed_twice_without_force_is_idempotent() {
    let store = store();
    assert_eq!(store.seed(false).unwrap(), SeedOutcome::Seeded);
    let first = store.load();

    assert_eq!(store.seed(false).unwrap(), SeedOutcome::Skipped);
    assert_eq!(store.load(), first);
}

#[test]
fn forced_seed_replaces_existing_data() {
    let store = store();
    store.seed(false).unwrap();
    let extra = store
        .create(Program::new("partner-a", "Ocean Lab"))
        .unwrap();

    assert_eq!(store.seed(true).unwrap(), SeedOutcome::Seeded);
    assert!(store.get::<Program>(&extra.id).is_none());
    assert_eq!(store.load(), partnerhub_core::store::seed::seed_snapshot());
}

#[test]
fn reset_clears_the_snapshot() {
    let store = store();
    store.seed(false).unwrap();
    store.reset().unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn load_or_seed_respects_config() {
    let unseeded = store();
    assert!(unseeded.load_or_seed().is_empty());

    let seeded = PrototypeStore::new(MemoryBackend::new(), StoreConfig::default());
    assert!(!seeded.load_or_seed().is_empty());
}
