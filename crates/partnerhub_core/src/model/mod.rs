//! Record types stored in the prototype snapshot.
//!
//! # Responsibility
//! - Define the canonical shape of every table row.
//! - Tie each record type to its table through the [`Record`] trait.
//!
//! # Invariants
//! - Every record carries a string `id` unique within its table.
//! - `id` and `created_at` are assigned by the store and never rewritten.
//! - Foreign-key-like fields are plain ids; resolution happens in selectors.

pub mod institution;
pub mod invitation;
pub mod partner;
pub mod program;
pub mod resource;
pub mod snapshot;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub use snapshot::Snapshot;

/// Record identifier. Seeded rows use readable slugs, created rows uuid v4.
pub type RecordId = String;

/// Unix epoch milliseconds.
pub type EpochMs = i64;

/// Named tables held by one [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Partners,
    Programs,
    Projects,
    Institutions,
    Teachers,
    Coordinators,
    Resources,
    Invitations,
    Templates,
}

impl Table {
    pub const ALL: [Table; 9] = [
        Table::Partners,
        Table::Programs,
        Table::Projects,
        Table::Institutions,
        Table::Teachers,
        Table::Coordinators,
        Table::Resources,
        Table::Invitations,
        Table::Templates,
    ];

    /// Field name of the table inside the persisted document.
    pub fn as_str(self) -> &'static str {
        match self {
            Table::Partners => "partners",
            Table::Programs => "programs",
            Table::Projects => "projects",
            Table::Institutions => "institutions",
            Table::Teachers => "teachers",
            Table::Coordinators => "coordinators",
            Table::Resources => "resources",
            Table::Invitations => "invitations",
            Table::Templates => "templates",
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row type that lives in exactly one snapshot table.
///
/// The store is generic over this trait, so `create`/`update`/`delete` work
/// the same for every table.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const TABLE: Table;

    fn id(&self) -> &str;

    fn rows(snapshot: &Snapshot) -> &Vec<Self>;

    fn rows_mut(snapshot: &mut Snapshot) -> &mut Vec<Self>;
}

macro_rules! impl_record {
    ($record:ty, $table:expr, $field:ident) => {
        impl $crate::model::Record for $record {
            const TABLE: $crate::model::Table = $table;

            fn id(&self) -> &str {
                self.id.as_str()
            }

            fn rows(snapshot: &$crate::model::Snapshot) -> &Vec<Self> {
                &snapshot.$field
            }

            fn rows_mut(snapshot: &mut $crate::model::Snapshot) -> &mut Vec<Self> {
                &mut snapshot.$field
            }
        }
    };
}

impl_record!(partner::Partner, Table::Partners, partners);
impl_record!(program::Program, Table::Programs, programs);
impl_record!(program::ProgramProject, Table::Projects, projects);
impl_record!(program::ProgramTemplate, Table::Templates, templates);
impl_record!(institution::EducationalInstitution, Table::Institutions, institutions);
impl_record!(institution::InstitutionTeacher, Table::Teachers, teachers);
impl_record!(institution::CountryCoordinator, Table::Coordinators, coordinators);
impl_record!(resource::ProgramResource, Table::Resources, resources);
impl_record!(invitation::ProgramInvitation, Table::Invitations, invitations);
