//! Partner organizations and the parent networks they can belong to.

use crate::model::{EpochMs, RecordId};
use serde::{Deserialize, Serialize};

/// Organization category shown on partner profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    #[default]
    Ngo,
    Foundation,
    Company,
    University,
    Government,
}

/// Where a partner sits inside a federation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerLevel {
    /// Umbrella organization operating across countries.
    International,
    /// Country-level member organization.
    #[default]
    Country,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

/// Known federations of country-level partners administered by a parent
/// organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentNetwork {
    TeachForAll,
    JuniorAchievement,
    Enactus,
}

impl ParentNetwork {
    pub fn display_name(self) -> &'static str {
        match self {
            ParentNetwork::TeachForAll => "Teach For All",
            ParentNetwork::JuniorAchievement => "Junior Achievement Worldwide",
            ParentNetwork::Enactus => "Enactus",
        }
    }
}

/// Organization offering programs on the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: RecordId,
    pub name: String,
    /// Serialized as `type` to match the dashboard schema.
    #[serde(rename = "type")]
    pub kind: PartnerType,
    #[serde(default)]
    pub level: PartnerLevel,
    /// Federation membership; `None` for independent partners.
    #[serde(default)]
    pub network: Option<ParentNetwork>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub created_at: EpochMs,
    #[serde(default)]
    pub updated_at: Option<EpochMs>,
}

impl Partner {
    /// Builds an unsaved partner; the store assigns `id` and `created_at`.
    pub fn new(name: impl Into<String>, kind: PartnerType, level: PartnerLevel) -> Self {
        Self {
            name: name.into(),
            kind,
            level,
            ..Self::default()
        }
    }

    pub fn is_country_level(&self) -> bool {
        self.level == PartnerLevel::Country
    }
}
