//! Coordinator dashboard context keyed by session email.

use crate::model::institution::{CountryCoordinator, EducationalInstitution};
use crate::model::invitation::ProgramInvitation;
use crate::model::program::Program;
use crate::model::Snapshot;
use crate::selectors::session::{email_matches, normalize_email};
use serde::Serialize;

/// One program/region assignment of a coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorAssignment<'a> {
    pub coordinator: &'a CountryCoordinator,
    pub program: &'a Program,
    /// Institutions this coordinator record manages.
    pub institutions: Vec<&'a EducationalInstitution>,
    pub teacher_count: usize,
    pub pending_invitations: Vec<&'a ProgramInvitation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorContext<'a> {
    pub email: Option<String>,
    /// Assignments whose program resolves, in coordinator insertion order.
    pub assignments: Vec<CoordinatorAssignment<'a>>,
}

impl CoordinatorContext<'_> {
    pub fn institution_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|assignment| assignment.institutions.len())
            .sum()
    }

    pub fn student_count(&self) -> u64 {
        self.assignments
            .iter()
            .flat_map(|assignment| assignment.institutions.iter())
            .map(|institution| u64::from(institution.student_count))
            .sum()
    }
}

pub fn build_coordinator_context<'a>(snapshot: &'a Snapshot, email: &str) -> CoordinatorContext<'a> {
    let Some(email) = normalize_email(email) else {
        return CoordinatorContext::default();
    };

    let assignments = snapshot
        .coordinators
        .iter()
        .filter(|coordinator| email_matches(&coordinator.email, &email))
        .filter_map(|coordinator| {
            let program = snapshot.find::<Program>(&coordinator.program_id)?;
            let institutions: Vec<&EducationalInstitution> = snapshot
                .institutions
                .iter()
                .filter(|institution| {
                    institution.coordinator_id == coordinator.id
                        && institution.program_id == program.id
                })
                .collect();
            let teacher_count = snapshot
                .teachers
                .iter()
                .filter(|teacher| {
                    teacher.program_id == program.id
                        && institutions
                            .iter()
                            .any(|institution| institution.id == teacher.institution_id)
                })
                .count();
            let pending_invitations = snapshot
                .invitations
                .iter()
                .filter(|invitation| invitation.program_id == program.id && invitation.is_pending())
                .collect();

            Some(CoordinatorAssignment {
                coordinator,
                program,
                institutions,
                teacher_count,
                pending_invitations,
            })
        })
        .collect();

    CoordinatorContext {
        email: Some(email),
        assignments,
    }
}
