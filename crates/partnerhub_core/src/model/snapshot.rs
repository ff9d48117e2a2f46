//! Whole-store snapshot and its persisted document format.
//!
//! # Responsibility
//! - Hold every table as an insertion-ordered `Vec`.
//! - Parse and render the single JSON document persisted under the storage
//!   key, migrating older document versions in-process.
//!
//! # Invariants
//! - Rendered documents always carry `schemaVersion == SNAPSHOT_SCHEMA_VERSION`.
//! - Documents without `schemaVersion` are version 0 (legacy table names).
//! - Documents newer than this binary are rejected, never reinterpreted.

use crate::model::institution::{CountryCoordinator, EducationalInstitution, InstitutionTeacher};
use crate::model::invitation::ProgramInvitation;
use crate::model::partner::Partner;
use crate::model::program::{Program, ProgramProject, ProgramTemplate};
use crate::model::resource::ProgramResource;
use crate::model::{Record, Table};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Version written by this binary.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

const SCHEMA_VERSION_FIELD: &str = "schemaVersion";

/// Version 0 used the dashboard's long table names.
const LEGACY_TABLE_NAMES: &[(&str, Table)] = &[
    ("programProjects", Table::Projects),
    ("educationalInstitutions", Table::Institutions),
    ("institutionTeachers", Table::Teachers),
    ("countryCoordinators", Table::Coordinators),
    ("programResources", Table::Resources),
    ("programInvitations", Table::Invitations),
    ("programTemplates", Table::Templates),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub schema_version: u32,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub projects: Vec<ProgramProject>,
    #[serde(default)]
    pub institutions: Vec<EducationalInstitution>,
    #[serde(default)]
    pub teachers: Vec<InstitutionTeacher>,
    #[serde(default)]
    pub coordinators: Vec<CountryCoordinator>,
    #[serde(default)]
    pub resources: Vec<ProgramResource>,
    #[serde(default)]
    pub invitations: Vec<ProgramInvitation>,
    #[serde(default)]
    pub templates: Vec<ProgramTemplate>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            partners: Vec::new(),
            programs: Vec::new(),
            projects: Vec::new(),
            institutions: Vec::new(),
            teachers: Vec::new(),
            coordinators: Vec::new(),
            resources: Vec::new(),
            invitations: Vec::new(),
            templates: Vec::new(),
        }
    }
}

impl Snapshot {
    /// Returns whether every table is empty.
    pub fn is_empty(&self) -> bool {
        Table::ALL.iter().all(|table| self.table_len(*table) == 0)
    }

    pub fn table_len(&self, table: Table) -> usize {
        match table {
            Table::Partners => self.partners.len(),
            Table::Programs => self.programs.len(),
            Table::Projects => self.projects.len(),
            Table::Institutions => self.institutions.len(),
            Table::Teachers => self.teachers.len(),
            Table::Coordinators => self.coordinators.len(),
            Table::Resources => self.resources.len(),
            Table::Invitations => self.invitations.len(),
            Table::Templates => self.templates.len(),
        }
    }

    /// Finds one record by id in its table.
    pub fn find<T: Record>(&self, id: &str) -> Option<&T> {
        T::rows(self).iter().find(|record| record.id() == id)
    }

    /// Parses a persisted document, migrating older versions.
    pub fn from_document(document: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(document)?;
        let migrated = migrate_document(value)?;
        Ok(serde_json::from_value(migrated)?)
    }

    /// Renders the document persisted under the storage key.
    pub fn to_document(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Failure to turn a persisted document into a [`Snapshot`].
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
    NotAnObject,
    InvalidVersion(Value),
    UnsupportedVersion { found: u32, supported: u32 },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed snapshot document: {err}"),
            Self::NotAnObject => write!(f, "snapshot document must be a JSON object"),
            Self::InvalidVersion(value) => write!(f, "invalid schemaVersion value `{value}`"),
            Self::UnsupportedVersion { found, supported } => write!(
                f,
                "snapshot schema version {found} is newer than supported {supported}"
            ),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Upgrades a raw document to [`SNAPSHOT_SCHEMA_VERSION`].
pub fn migrate_document(value: Value) -> Result<Value, SnapshotError> {
    let Value::Object(mut document) = value else {
        return Err(SnapshotError::NotAnObject);
    };

    let version = match document.get(SCHEMA_VERSION_FIELD) {
        None | Some(Value::Null) => 0,
        Some(raw) => raw
            .as_u64()
            .and_then(|number| u32::try_from(number).ok())
            .ok_or_else(|| SnapshotError::InvalidVersion(raw.clone()))?,
    };

    if version > SNAPSHOT_SCHEMA_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: version,
            supported: SNAPSHOT_SCHEMA_VERSION,
        });
    }

    if version == 0 {
        rename_legacy_tables(&mut document);
    }

    document.insert(
        SCHEMA_VERSION_FIELD.to_string(),
        Value::from(SNAPSHOT_SCHEMA_VERSION),
    );
    Ok(Value::Object(document))
}

fn rename_legacy_tables(document: &mut Map<String, Value>) {
    for (legacy_name, table) in LEGACY_TABLE_NAMES {
        let Some(rows) = document.remove(*legacy_name) else {
            continue;
        };
        document.entry(table.as_str().to_string()).or_insert(rows);
    }
}
