//! Teacher dashboard context keyed by session email.

use crate::model::institution::{EducationalInstitution, InstitutionTeacher};
use crate::model::partner::Partner;
use crate::model::program::{Program, ProgramProject, ProgramTemplate};
use crate::model::Snapshot;
use crate::selectors::session::{email_matches, normalize_email};
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProgramSummary<'a> {
    pub program: &'a Program,
    /// `None` when the owning partner no longer resolves.
    pub partner: Option<&'a Partner>,
    /// The teacher's institutions inside this program.
    pub institutions: Vec<&'a EducationalInstitution>,
    pub projects: Vec<&'a ProgramProject>,
    pub templates: Vec<&'a ProgramTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherContext<'a> {
    /// Normalized session email; `None` when the input was not an address.
    pub email: Option<String>,
    pub memberships: Vec<&'a InstitutionTeacher>,
    /// Distinct program ids across memberships, first-seen order.
    pub program_ids: Vec<&'a str>,
    /// Institutions reachable through memberships that resolve.
    pub institutions: Vec<&'a EducationalInstitution>,
    /// One entry per program id that resolves to a program record.
    pub programs: Vec<TeacherProgramSummary<'a>>,
}

impl TeacherContext<'_> {
    pub fn has_memberships(&self) -> bool {
        !self.memberships.is_empty()
    }
}

pub fn build_teacher_context<'a>(snapshot: &'a Snapshot, email: &str) -> TeacherContext<'a> {
    let Some(email) = normalize_email(email) else {
        return TeacherContext::default();
    };

    let memberships: Vec<&InstitutionTeacher> = snapshot
        .teachers
        .iter()
        .filter(|teacher| email_matches(&teacher.email, &email))
        .collect();

    let mut program_ids: Vec<&str> = Vec::new();
    let mut institutions: Vec<&EducationalInstitution> = Vec::new();
    for &membership in &memberships {
        if !program_ids.contains(&membership.program_id.as_str()) {
            program_ids.push(membership.program_id.as_str());
        }
        if let Some(institution) = snapshot.find::<EducationalInstitution>(&membership.institution_id) {
            if !institutions.iter().any(|known| known.id == institution.id) {
                institutions.push(institution);
            }
        }
    }

    let programs: Vec<TeacherProgramSummary> = program_ids
        .iter()
        .filter_map(|program_id| snapshot.find::<Program>(program_id))
        .map(|program| TeacherProgramSummary {
            program,
            partner: snapshot.find::<Partner>(&program.partner_id),
            institutions: institutions
                .iter()
                .copied()
                .filter(|institution| institution.program_id == program.id)
                .collect(),
            projects: snapshot
                .projects
                .iter()
                .filter(|project| {
                    project.program_id == program.id
                        && project.institution_id.as_deref().is_some_and(|id| {
                            institutions.iter().any(|institution| institution.id == id)
                        })
                })
                .collect(),
            templates: snapshot
                .templates
                .iter()
                .filter(|template| template.program_id == program.id)
                .collect(),
        })
        .collect();

    if programs.len() < program_ids.len() {
        debug!(
            "event=teacher_context module=selectors status=ok dropped_programs={}",
            program_ids.len() - programs.len()
        );
    }

    TeacherContext {
        email: Some(email),
        memberships,
        program_ids,
        institutions,
        programs,
    }
}

#[cfg(test)]
mod tests {
    use super::build_teacher_context;
    use crate::model::institution::InstitutionTeacher;
    use crate::model::Snapshot;
    use crate::store::seed::seed_snapshot;

    #[test]
    fn empty_snapshot_gives_empty_context() {
        let snapshot = Snapshot::default();
        let context = build_teacher_context(&snapshot, "grace.wanjiru@nairobihill.ac.ke");
        assert!(!context.has_memberships());
        assert!(context.programs.is_empty());
    }

    #[test]
    fn invalid_email_gives_empty_context() {
        let snapshot = seed_snapshot();
        let context = build_teacher_context(&snapshot, "not an email");
        assert!(context.email.is_none());
        assert!(!context.has_memberships());
    }

    #[test]
    fn memberships_span_programs_and_drop_unresolved_ones() {
        let snapshot = seed_snapshot();
        let context = build_teacher_context(&snapshot, " Grace.Wanjiru@nairobihill.ac.ke");

        assert_eq!(context.memberships.len(), 3);
        assert_eq!(
            context.program_ids,
            vec![
                "program-climate-classrooms",
                "program-ocean-literacy",
                "program-retired-pilot"
            ]
        );
        assert_eq!(context.institutions.len(), 2);

        let summaries: Vec<&str> = context
            .programs
            .iter()
            .map(|summary| summary.program.id.as_str())
            .collect();
        assert_eq!(
            summaries,
            vec!["program-climate-classrooms", "program-ocean-literacy"]
        );
        assert_eq!(context.programs[0].projects.len(), 1);
        assert_eq!(context.programs[1].institutions[0].id, "inst-zanzibar-reef");
    }

    #[test]
    fn accented_stored_email_finds_its_membership() {
        let mut snapshot = Snapshot::default();
        let mut membership = InstitutionTeacher::new("inst-lyon", "program-lyon", "ÉLISE@ecole.fr");
        membership.id = "teacher-elise".to_string();
        snapshot.teachers.push(membership);

        let context = build_teacher_context(&snapshot, "ÉLISE@ecole.fr");
        assert_eq!(context.email.as_deref(), Some("élise@ecole.fr"));
        assert_eq!(context.memberships.len(), 1);
        assert_eq!(context.memberships[0].id, "teacher-elise");
    }
}
