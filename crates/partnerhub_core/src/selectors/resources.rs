//! Resource visibility for partner and parent views.

use crate::model::resource::{AvailabilityScope, ProgramResource, ResourceOwnerRole};
use std::cmp::Reverse;

/// Returns whether `partner_id` may see `resource`.
///
/// Visible when the partner owns it, or when a parent organization shared it
/// with all partners, or with a target list naming this partner.
pub fn is_visible_to_partner(resource: &ProgramResource, partner_id: &str) -> bool {
    match resource.owner_role {
        ResourceOwnerRole::Partner => resource.owner_id == partner_id,
        ResourceOwnerRole::Parent => match resource.availability_scope {
            AvailabilityScope::AllPartners => true,
            AvailabilityScope::SpecificPartners => resource
                .target_partner_ids
                .iter()
                .any(|target| target == partner_id),
            AvailabilityScope::Organization => false,
        },
    }
}

/// Resources a partner dashboard lists, most recently changed first.
pub fn get_resources_for_partner<'a>(
    resources: &'a [ProgramResource],
    partner_id: &str,
) -> Vec<&'a ProgramResource> {
    let partner_id = partner_id.trim();
    if partner_id.is_empty() {
        return Vec::new();
    }

    let mut visible: Vec<&ProgramResource> = resources
        .iter()
        .filter(|resource| is_visible_to_partner(resource, partner_id))
        .collect();
    sort_most_recent_first(&mut visible);
    visible
}

/// Resources owned by a parent organization, most recently changed first.
pub fn get_resources_for_parent<'a>(
    resources: &'a [ProgramResource],
    organization_id: &str,
) -> Vec<&'a ProgramResource> {
    let organization_id = organization_id.trim();
    let mut owned: Vec<&ProgramResource> = resources
        .iter()
        .filter(|resource| {
            resource.owner_role == ResourceOwnerRole::Parent && resource.owner_id == organization_id
        })
        .collect();
    sort_most_recent_first(&mut owned);
    owned
}

fn sort_most_recent_first(resources: &mut [&ProgramResource]) {
    resources.sort_by(|left, right| {
        Reverse(left.last_touched_at())
            .cmp(&Reverse(right.last_touched_at()))
            .then_with(|| left.id.cmp(&right.id))
    });
}
