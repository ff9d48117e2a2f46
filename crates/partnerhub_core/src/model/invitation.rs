//! Typed invitations scoped to a program.

use crate::model::{EpochMs, RecordId};
use serde::{Deserialize, Serialize};

/// Who the invitation is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationKind {
    #[default]
    Institution,
    Teacher,
    Coordinator,
    Partner,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramInvitation {
    pub id: RecordId,
    pub program_id: RecordId,
    #[serde(default)]
    pub kind: InvitationKind,
    pub email: String,
    #[serde(default)]
    pub status: InvitationStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}

impl ProgramInvitation {
    pub fn is_pending(&self) -> bool {
        self.status == InvitationStatus::Pending
    }
}
