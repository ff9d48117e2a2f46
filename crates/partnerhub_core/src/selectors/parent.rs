//! Parent-organization scoping.
//!
//! A parent organization administers one federation of country-level
//! partners. Classification is an explicit directory lookup keyed by
//! organization id; partners declare their federation through
//! `Partner::network`.

use crate::model::partner::{ParentNetwork, Partner};
use crate::model::resource::ProgramResource;
use crate::model::{RecordId, Snapshot};
use crate::selectors::catalog::{build_program_catalog, CatalogOptions, ProgramCatalogEntry};
use crate::selectors::resources::get_resources_for_parent;
use serde::Serialize;

const PARENT_DIRECTORY: &[(&str, ParentNetwork)] = &[
    ("parent-tfa", ParentNetwork::TeachForAll),
    ("parent-ja", ParentNetwork::JuniorAchievement),
    ("parent-enactus", ParentNetwork::Enactus),
];

/// Looks up which federation a parent organization administers.
pub fn classify_parent_network(organization_id: &str) -> Option<ParentNetwork> {
    let organization_id = organization_id.trim();
    PARENT_DIRECTORY
        .iter()
        .find(|(id, _)| *id == organization_id)
        .map(|(_, network)| *network)
}

/// Partners a parent organization may act on.
///
/// Country-level partners of the organization's federation; every partner
/// when the organization is not in the directory.
pub fn get_scoped_parent_partners<'a>(
    partners: &'a [Partner],
    organization_id: &str,
) -> Vec<&'a Partner> {
    match classify_parent_network(organization_id) {
        Some(network) => partners
            .iter()
            .filter(|partner| partner.network == Some(network) && partner.is_country_level())
            .collect(),
        None => partners.iter().collect(),
    }
}

pub fn get_scoped_parent_partner_ids(partners: &[Partner], organization_id: &str) -> Vec<RecordId> {
    get_scoped_parent_partners(partners, organization_id)
        .into_iter()
        .map(|partner| partner.id.clone())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentContext<'a> {
    pub organization_id: String,
    pub network: Option<ParentNetwork>,
    pub partners: Vec<&'a Partner>,
    /// Public and private programs run by scoped partners.
    pub programs: Vec<ProgramCatalogEntry<'a>>,
    pub resources: Vec<&'a ProgramResource>,
}

/// Builds the parent-network administrator dashboard view.
pub fn build_parent_context<'a>(snapshot: &'a Snapshot, organization_id: &str) -> ParentContext<'a> {
    let organization_id = organization_id.trim();
    let partners = get_scoped_parent_partners(&snapshot.partners, organization_id);
    let programs = build_program_catalog(snapshot, &CatalogOptions::all_programs())
        .into_iter()
        .filter(|entry| partners.iter().any(|partner| partner.id == entry.partner.id))
        .collect();

    ParentContext {
        organization_id: organization_id.to_string(),
        network: classify_parent_network(organization_id),
        partners,
        programs,
        resources: get_resources_for_parent(&snapshot.resources, organization_id),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_parent_context, classify_parent_network, get_scoped_parent_partner_ids};
    use crate::model::partner::ParentNetwork;
    use crate::model::Snapshot;
    use crate::store::seed::seed_snapshot;

    #[test]
    fn directory_lookup_is_exact() {
        assert_eq!(
            classify_parent_network(" parent-ja "),
            Some(ParentNetwork::JuniorAchievement)
        );
        assert_eq!(classify_parent_network("parent-ja-legacy"), None);
    }

    #[test]
    fn network_scope_keeps_country_partners_only() {
        let snapshot = seed_snapshot();
        let ids = get_scoped_parent_partner_ids(&snapshot.partners, "parent-tfa");
        assert_eq!(ids, vec!["partner-tfa-kenya", "partner-tfa-india"]);
    }

    #[test]
    fn unknown_organization_falls_back_to_all_partners() {
        let snapshot = seed_snapshot();
        let ids = get_scoped_parent_partner_ids(&snapshot.partners, "parent-unknown");
        assert_eq!(ids.len(), snapshot.partners.len());
    }

    #[test]
    fn parent_context_on_empty_snapshot_is_empty() {
        let snapshot = Snapshot::default();
        let context = build_parent_context(&snapshot, "parent-tfa");
        assert!(context.partners.is_empty());
        assert!(context.programs.is_empty());
        assert!(context.resources.is_empty());
    }

    #[test]
    fn parent_context_joins_programs_and_owned_resources() {
        let snapshot = seed_snapshot();
        let context = build_parent_context(&snapshot, "parent-tfa");
        assert_eq!(context.network, Some(ParentNetwork::TeachForAll));
        assert_eq!(context.programs.len(), 1);
        assert_eq!(context.programs[0].program.id, "program-climate-classrooms");
        assert_eq!(context.resources.len(), 2);
    }
}
