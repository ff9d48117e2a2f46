//! School (institution) dashboard context.

use crate::model::institution::{CountryCoordinator, EducationalInstitution, InstitutionTeacher};
use crate::model::partner::Partner;
use crate::model::program::{Program, ProgramProject, ProgramTemplate};
use crate::model::Snapshot;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolContext<'a> {
    pub institution: &'a EducationalInstitution,
    pub program: Option<&'a Program>,
    pub partner: Option<&'a Partner>,
    pub coordinator: Option<&'a CountryCoordinator>,
    pub teachers: Vec<&'a InstitutionTeacher>,
    pub projects: Vec<&'a ProgramProject>,
    /// Templates of the institution's program; empty when it is unresolved.
    pub templates: Vec<&'a ProgramTemplate>,
}

/// Returns `None` when `institution_id` does not resolve.
pub fn build_school_context<'a>(snapshot: &'a Snapshot, institution_id: &str) -> Option<SchoolContext<'a>> {
    let institution = snapshot.find::<EducationalInstitution>(institution_id.trim())?;
    let program = snapshot.find::<Program>(&institution.program_id);
    let partner = program.and_then(|program| snapshot.find::<Partner>(&program.partner_id));

    let templates = match program {
        Some(program) => snapshot
            .templates
            .iter()
            .filter(|template| template.program_id == program.id)
            .collect(),
        None => Vec::new(),
    };

    Some(SchoolContext {
        institution,
        program,
        partner,
        coordinator: snapshot.find::<CountryCoordinator>(&institution.coordinator_id),
        teachers: snapshot
            .teachers
            .iter()
            .filter(|teacher| teacher.institution_id == institution.id)
            .collect(),
        projects: snapshot
            .projects
            .iter()
            .filter(|project| project.institution_id.as_deref() == Some(institution.id.as_str()))
            .collect(),
        templates,
    })
}
