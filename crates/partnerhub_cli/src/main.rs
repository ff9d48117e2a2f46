//! CLI smoke entry point.
//!
//! Seeds a throwaway SQLite-backed store and prints a deterministic summary,
//! which checks `partnerhub_core` wiring without any UI host.

use partnerhub_core::{
    build_program_catalog, CatalogOptions, PrototypeStore, SqliteBackend, StoreConfig, Table,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("partnerhub_core ping={}", partnerhub_core::ping());
    println!("partnerhub_core version={}", partnerhub_core::core_version());

    let backend = match SqliteBackend::open_in_memory() {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("failed to open prototype store: {err}");
            return ExitCode::FAILURE;
        }
    };
    let store = PrototypeStore::new(backend, StoreConfig::default());
    let snapshot = store.load_or_seed();

    for table in Table::ALL {
        println!("table {}={}", table, snapshot.table_len(table));
    }
    let catalog = build_program_catalog(&snapshot, &CatalogOptions::default());
    println!("public_programs={}", catalog.len());
    ExitCode::SUCCESS
}
