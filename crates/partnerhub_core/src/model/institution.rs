//! Schools, their teachers, and the country coordinators who onboard them.

use crate::model::{EpochMs, RecordId};
use serde::{Deserialize, Serialize};

/// School-like entity taking part in one program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalInstitution {
    pub id: RecordId,
    pub program_id: RecordId,
    /// Coordinator who onboarded and manages this institution.
    pub coordinator_id: RecordId,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}

/// Teacher membership linking an email to one institution and one program.
///
/// The same email may hold several memberships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionTeacher {
    pub id: RecordId,
    pub institution_id: RecordId,
    pub program_id: RecordId,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}

impl InstitutionTeacher {
    pub fn new(
        institution_id: impl Into<RecordId>,
        program_id: impl Into<RecordId>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            institution_id: institution_id.into(),
            program_id: program_id.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Email-identified coordinator scoped to one program and one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCoordinator {
    pub id: RecordId,
    pub program_id: RecordId,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub region: String,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}
