//! Shared content items and their availability policy.
//!
//! # Invariants
//! - `owner_role == Partner` means `owner_id` is a partner id.
//! - `owner_role == Parent` means `owner_id` is a parent organization id.
//! - `availability_scope == SpecificPartners` is expected to carry a
//!   non-empty `target_partner_ids`; [`ProgramResource::validate`] reports
//!   violations but the store does not block them.

use crate::model::{EpochMs, RecordId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceOwnerRole {
    #[default]
    Partner,
    Parent,
}

/// Visibility policy tag on a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityScope {
    /// Only the owning organization sees it.
    #[default]
    Organization,
    /// Every partner sees it.
    AllPartners,
    /// Only partners listed in `target_partner_ids` see it.
    SpecificPartners,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramResource {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner_role: ResourceOwnerRole,
    pub owner_id: RecordId,
    #[serde(default)]
    pub program_id: Option<RecordId>,
    #[serde(default)]
    pub availability_scope: AvailabilityScope,
    #[serde(default)]
    pub target_partner_ids: Vec<RecordId>,
    #[serde(default)]
    pub sdg_tags: Vec<u8>,
    #[serde(default)]
    pub audience_tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}

/// Contract violations detected on a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceValidationError {
    EmptyTitle,
    MissingTargetPartners,
    SdgOutOfRange(u8),
}

impl Display for ResourceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "resource title must not be blank"),
            Self::MissingTargetPartners => write!(
                f,
                "specific_partners scope requires at least one target partner"
            ),
            Self::SdgOutOfRange(value) => write!(f, "sdg tag {value} is outside 1..=17"),
        }
    }
}

impl Error for ResourceValidationError {}

impl ProgramResource {
    /// Builds an unsaved partner-owned resource visible to its owner only.
    pub fn owned_by_partner(partner_id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            owner_role: ResourceOwnerRole::Partner,
            owner_id: partner_id.into(),
            ..Self::default()
        }
    }

    /// Builds an unsaved parent-owned resource with the given scope.
    pub fn owned_by_parent(
        organization_id: impl Into<RecordId>,
        title: impl Into<String>,
        scope: AvailabilityScope,
        target_partner_ids: Vec<RecordId>,
    ) -> Self {
        Self {
            title: title.into(),
            owner_role: ResourceOwnerRole::Parent,
            owner_id: organization_id.into(),
            availability_scope: scope,
            target_partner_ids,
            ..Self::default()
        }
    }

    /// Timestamp used for "most recently changed first" ordering.
    pub fn last_touched_at(&self) -> EpochMs {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Checks the soft contract of this resource.
    pub fn validate(&self) -> Result<(), ResourceValidationError> {
        if self.title.trim().is_empty() {
            return Err(ResourceValidationError::EmptyTitle);
        }
        if self.availability_scope == AvailabilityScope::SpecificPartners
            && self.target_partner_ids.is_empty()
        {
            return Err(ResourceValidationError::MissingTargetPartners);
        }
        if let Some(tag) = self.sdg_tags.iter().find(|tag| !(1..=17).contains(*tag)) {
            return Err(ResourceValidationError::SdgOutOfRange(*tag));
        }
        Ok(())
    }
}
