//! Prototype store: one persisted snapshot with generic CRUD over its tables.
//!
//! # Responsibility
//! - Define the backend seam the snapshot document is persisted through.
//! - Expose load/seed/create/update/delete/reset over any backend.
//! - Notify same-context subscribers after each successful write.
//!
//! # Invariants
//! - Every write is a full read-modify-write of the whole document; the
//!   last writer wins.
//! - Reads never fail: unreadable documents load as an empty snapshot.
//! - Lookup misses are reported as `None`/`false`, never as errors.

use crate::db::DbError;
use crate::model::snapshot::SnapshotError;
use crate::model::{RecordId, Table};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod backend;
mod cache;
mod prototype;
pub mod seed;

pub use backend::{MemoryBackend, SqliteBackend};
pub use cache::SnapshotCache;
pub use prototype::{PrototypeStore, SeedOutcome};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store write or of the backing storage.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Document(SnapshotError),
    /// A record could not be shaped into its table row.
    InvalidRecord { table: Table, message: String },
    /// Merged fields no longer fit the record shape.
    InvalidPatch {
        table: Table,
        id: RecordId,
        message: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Document(err) => write!(f, "{err}"),
            Self::InvalidRecord { table, message } => {
                write!(f, "invalid {table} record: {message}")
            }
            Self::InvalidPatch { table, id, message } => {
                write!(f, "invalid patch for {table}/{id}: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Document(err) => Some(err),
            Self::InvalidRecord { .. } | Self::InvalidPatch { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<SnapshotError> for StoreError {
    fn from(value: SnapshotError) -> Self {
        Self::Document(value)
    }
}

/// Key-value persistence the snapshot document is written through.
///
/// Implementations store opaque strings; they know nothing about tables.
pub trait SnapshotBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    fn write(&self, key: &str, document: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Opaque counter that moves when another context commits a write to
    /// `key`.
    ///
    /// Consumers compare successive values only; the absolute number has no
    /// meaning. A backend may report a coarser marker that also moves for
    /// other keys; that only costs extra reloads.
    fn change_marker(&self, key: &str) -> StoreResult<u64>;
}

/// What a successful write did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    Seeded,
    Reset,
}

/// Notification delivered to same-context subscribers after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub kind: ChangeKind,
    /// `None` for whole-store writes (seed, reset).
    pub table: Option<Table>,
    pub id: Option<RecordId>,
}
