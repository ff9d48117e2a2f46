//! Partner dashboard context.

use crate::model::invitation::ProgramInvitation;
use crate::model::partner::Partner;
use crate::model::program::ProgramTemplate;
use crate::model::resource::ProgramResource;
use crate::model::Snapshot;
use crate::selectors::catalog::{build_program_catalog, CatalogOptions, ProgramCatalogEntry};
use crate::selectors::resources::get_resources_for_partner;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContext<'a> {
    pub partner: &'a Partner,
    /// Owned programs including private ones.
    pub programs: Vec<ProgramCatalogEntry<'a>>,
    pub resources: Vec<&'a ProgramResource>,
    pub pending_invitations: Vec<&'a ProgramInvitation>,
    pub templates: Vec<&'a ProgramTemplate>,
}

/// Returns `None` when `partner_id` does not resolve.
pub fn build_partner_context<'a>(snapshot: &'a Snapshot, partner_id: &str) -> Option<PartnerContext<'a>> {
    let partner = snapshot.find::<Partner>(partner_id.trim())?;
    let programs: Vec<ProgramCatalogEntry> =
        build_program_catalog(snapshot, &CatalogOptions::all_programs())
            .into_iter()
            .filter(|entry| entry.partner.id == partner.id)
            .collect();
    let owns_program =
        |program_id: &str| programs.iter().any(|entry| entry.program.id == program_id);

    let pending_invitations = snapshot
        .invitations
        .iter()
        .filter(|invitation| invitation.is_pending() && owns_program(&invitation.program_id))
        .collect();
    let templates = snapshot
        .templates
        .iter()
        .filter(|template| owns_program(&template.program_id))
        .collect();

    Some(PartnerContext {
        partner,
        resources: get_resources_for_partner(&snapshot.resources, &partner.id),
        pending_invitations,
        templates,
        programs,
    })
}
