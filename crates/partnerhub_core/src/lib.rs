//! Core data layer for the PartnerHub education-partnership dashboard.
//!
//! The crate owns the record model, the persisted prototype store, and the
//! selectors that turn a loaded snapshot into role-scoped views.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod selectors;
pub mod store;

pub use config::{ConfigError, StoreConfig, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::{Record, RecordId, Snapshot, Table};
pub use selectors::{
    build_coordinator_context, build_parent_context, build_partner_context,
    build_program_catalog, build_school_context, build_teacher_context, classify_parent_network,
    get_resources_for_parent, get_resources_for_partner, get_scoped_parent_partner_ids,
    CatalogOptions,
};
pub use store::{
    ChangeKind, MemoryBackend, PrototypeStore, SeedOutcome, SnapshotBackend, SnapshotCache,
    SqliteBackend, StoreChange, StoreError, StoreResult,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
