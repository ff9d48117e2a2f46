//! Generic CRUD over the persisted snapshot.

use crate::config::StoreConfig;
use crate::model::{EpochMs, Record, Snapshot, Table};
use crate::store::seed::seed_snapshot;
use crate::store::{ChangeKind, SnapshotBackend, StoreChange, StoreError, StoreResult};
use log::{debug, error, info, warn};
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const ID_FIELD: &str = "id";
const CREATED_AT_FIELD: &str = "createdAt";
const UPDATED_AT_FIELD: &str = "updatedAt";

type Listener = Rc<dyn Fn(&StoreChange)>;

/// Result of [`PrototypeStore::seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The snapshot was replaced with the seed dataset.
    Seeded,
    /// The snapshot already held data and `force` was not set.
    Skipped,
}

/// Owned handle over one persisted snapshot.
///
/// Construct it once at startup and pass it by reference to consumers.
/// Writes are synchronous: once a call returns, the next `load` sees it.
pub struct PrototypeStore<B: SnapshotBackend> {
    backend: B,
    config: StoreConfig,
    clock: fn() -> EpochMs,
    revision: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
}

impl<B: SnapshotBackend> PrototypeStore<B> {
    pub fn new(backend: B, config: StoreConfig) -> Self {
        Self {
            backend,
            config,
            clock: now_epoch_ms,
            revision: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Replaces the wall clock used for `createdAt`/`updatedAt` stamps.
    pub fn with_clock(mut self, clock: fn() -> EpochMs) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Count of successful writes made through this handle.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Registers a callback invoked after every successful write.
    ///
    /// Callbacks may subscribe further listeners; those start with the next
    /// write.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Returns the persisted snapshot, or an empty one when nothing usable
    /// is stored.
    pub fn load(&self) -> Snapshot {
        let key = self.config.storage_key.as_str();
        let document = match self.backend.read(key) {
            Ok(Some(document)) => document,
            Ok(None) => return Snapshot::default(),
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=backend_read_failed error={err}"
                );
                return Snapshot::default();
            }
        };

        match Snapshot::from_document(&document) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback error_code=snapshot_unreadable bytes={} error={err}",
                    document.len()
                );
                Snapshot::default()
            }
        }
    }

    /// Loads the snapshot, seeding first when configured and nothing is
    /// stored yet.
    pub fn load_or_seed(&self) -> Snapshot {
        let snapshot = self.load();
        if !snapshot.is_empty() || !self.config.seed_on_first_load {
            return snapshot;
        }

        match self.seed(false) {
            Ok(_) => self.load(),
            Err(err) => {
                error!(
                    "event=store_seed module=store status=error error_code=seed_failed error={err}"
                );
                snapshot
            }
        }
    }

    /// Replaces an empty snapshot (or any snapshot when `force`) with the
    /// deterministic seed dataset.
    pub fn seed(&self, force: bool) -> StoreResult<SeedOutcome> {
        if !force && !self.load().is_empty() {
            debug!("event=store_seed module=store status=skip reason=not_empty");
            return Ok(SeedOutcome::Skipped);
        }

        let snapshot = seed_snapshot();
        self.persist(
            &snapshot,
            StoreChange {
                kind: ChangeKind::Seeded,
                table: None,
                id: None,
            },
        )?;
        info!(
            "event=store_seed module=store status=ok force={force} programs={} partners={}",
            snapshot.programs.len(),
            snapshot.partners.len()
        );
        Ok(SeedOutcome::Seeded)
    }

    /// Appends a record under a freshly generated id and returns it as
    /// stored.
    ///
    /// Any `id`, `created_at` or `updated_at` on the input is replaced.
    pub fn create<T: Record>(&self, record: T) -> StoreResult<T> {
        let mut snapshot = self.load();
        let id = unused_id::<T>(&snapshot);

        let mut fields = record_fields(&record)?;
        fields.insert(ID_FIELD.to_string(), Value::from(id.clone()));
        fields.insert(CREATED_AT_FIELD.to_string(), Value::from((self.clock)()));
        fields.insert(UPDATED_AT_FIELD.to_string(), Value::Null);
        let stored: T =
            serde_json::from_value(Value::Object(fields)).map_err(|err| {
                StoreError::InvalidRecord {
                    table: T::TABLE,
                    message: err.to_string(),
                }
            })?;

        T::rows_mut(&mut snapshot).push(stored.clone());
        self.persist(
            &snapshot,
            StoreChange {
                kind: ChangeKind::Created,
                table: Some(T::TABLE),
                id: Some(id),
            },
        )?;
        Ok(stored)
    }

    /// Shallow-merges `patch` onto the record with `id`.
    ///
    /// Returns `Ok(None)` and leaves the snapshot untouched when no record
    /// has that id. `id` and `createdAt` keys in the patch are ignored.
    ///
    /// # Errors
    /// - [`StoreError::InvalidPatch`] when the merged fields no longer fit
    ///   the record type; nothing is written in that case.
    pub fn update<T: Record>(&self, id: &str, patch: Map<String, Value>) -> StoreResult<Option<T>> {
        let mut snapshot = self.load();
        let Some(position) = T::rows(&snapshot).iter().position(|row| row.id() == id) else {
            debug!(
                "event=store_update module=store status=skip reason=not_found table={} id={id}",
                T::TABLE
            );
            return Ok(None);
        };

        let mut fields = record_fields(&T::rows(&snapshot)[position])?;
        for (key, value) in patch {
            if key == ID_FIELD || key == CREATED_AT_FIELD {
                continue;
            }
            fields.insert(key, value);
        }
        fields.insert(UPDATED_AT_FIELD.to_string(), Value::from((self.clock)()));

        let updated: T = serde_json::from_value(Value::Object(fields)).map_err(|err| {
            StoreError::InvalidPatch {
                table: T::TABLE,
                id: id.to_string(),
                message: err.to_string(),
            }
        })?;

        T::rows_mut(&mut snapshot)[position] = updated.clone();
        self.persist(
            &snapshot,
            StoreChange {
                kind: ChangeKind::Updated,
                table: Some(T::TABLE),
                id: Some(id.to_string()),
            },
        )?;
        Ok(Some(updated))
    }

    /// Removes the record with `id`; returns whether anything was removed.
    pub fn delete<T: Record>(&self, id: &str) -> StoreResult<bool> {
        let mut snapshot = self.load();
        let rows = T::rows_mut(&mut snapshot);
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Ok(false);
        }

        self.persist(
            &snapshot,
            StoreChange {
                kind: ChangeKind::Deleted,
                table: Some(T::TABLE),
                id: Some(id.to_string()),
            },
        )?;
        Ok(true)
    }

    pub fn get<T: Record>(&self, id: &str) -> Option<T> {
        self.load().find::<T>(id).cloned()
    }

    pub fn list<T: Record>(&self) -> Vec<T> {
        let mut snapshot = self.load();
        std::mem::take(T::rows_mut(&mut snapshot))
    }

    /// Drops the persisted document entirely.
    pub fn reset(&self) -> StoreResult<()> {
        self.backend.remove(&self.config.storage_key)?;
        self.after_write(StoreChange {
            kind: ChangeKind::Reset,
            table: None,
            id: None,
        });
        info!("event=store_reset module=store status=ok");
        Ok(())
    }

    fn persist(&self, snapshot: &Snapshot, change: StoreChange) -> StoreResult<()> {
        let document = snapshot.to_document()?;
        if let Err(err) = self.backend.write(&self.config.storage_key, &document) {
            error!(
                "event=store_write module=store status=error error_code=backend_write_failed error={err}"
            );
            return Err(err);
        }
        debug!(
            "event=store_write module=store status=ok kind={:?} table={} bytes={}",
            change.kind,
            change.table.map_or("*", Table::as_str),
            document.len()
        );
        self.after_write(change);
        Ok(())
    }

    fn after_write(&self, change: StoreChange) {
        self.revision.set(self.revision.get() + 1);
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&change);
        }
    }
}

fn record_fields<T: Record>(record: &T) -> StoreResult<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(StoreError::InvalidRecord {
            table: T::TABLE,
            message: "record did not serialize to an object".to_string(),
        }),
        Err(err) => Err(StoreError::InvalidRecord {
            table: T::TABLE,
            message: err.to_string(),
        }),
    }
}

fn unused_id<T: Record>(snapshot: &Snapshot) -> String {
    loop {
        let candidate = Uuid::new_v4().to_string();
        if snapshot.find::<T>(&candidate).is_none() {
            return candidate;
        }
    }
}

fn now_epoch_ms() -> EpochMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            EpochMs::try_from(elapsed.as_millis()).unwrap_or(EpochMs::MAX)
        })
}
