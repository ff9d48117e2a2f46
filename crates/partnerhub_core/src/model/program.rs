//! Programs and the records hanging directly off them.

use crate::model::{EpochMs, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramVisibility {
    #[default]
    Public,
    Private,
}

/// Program offered by exactly one partner.
///
/// Programs are the join point for institutions, coordinators, projects,
/// templates and invitations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: RecordId,
    pub partner_id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub visibility: ProgramVisibility,
    /// UN Sustainable Development Goal numbers (1..=17).
    #[serde(default)]
    pub sdg_focus: Vec<u8>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}

impl Program {
    /// Builds an unsaved public program owned by `partner_id`.
    pub fn new(partner_id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            partner_id: partner_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == ProgramVisibility::Public
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Active,
    Completed,
}

/// Classroom project run by an institution inside a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramProject {
    pub id: RecordId,
    pub program_id: RecordId,
    #[serde(default)]
    pub institution_id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}

/// Reusable project template published for a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramTemplate {
    pub id: RecordId,
    pub program_id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}
