//! Program catalog with participation metrics.

use crate::model::institution::EducationalInstitution;
use crate::model::partner::Partner;
use crate::model::program::{Program, ProjectStatus};
use crate::model::Snapshot;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Include programs whose visibility is `private`.
    pub include_private: bool,
}

impl CatalogOptions {
    pub fn all_programs() -> Self {
        Self {
            include_private: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMetrics {
    pub institution_count: usize,
    pub teacher_count: usize,
    pub student_count: u64,
    pub active_project_count: usize,
    pub completed_project_count: usize,
    /// Distinct institution countries.
    pub country_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCatalogEntry<'a> {
    pub program: &'a Program,
    pub partner: &'a Partner,
    pub metrics: ProgramMetrics,
}

/// Joins every program with its owning partner and computes metrics.
///
/// Programs whose partner does not resolve are left out. Order follows
/// program insertion order.
pub fn build_program_catalog<'a>(
    snapshot: &'a Snapshot,
    options: &CatalogOptions,
) -> Vec<ProgramCatalogEntry<'a>> {
    snapshot
        .programs
        .iter()
        .filter(|program| options.include_private || program.is_public())
        .filter_map(|program| {
            let partner = snapshot.find::<Partner>(&program.partner_id)?;
            Some(ProgramCatalogEntry {
                program,
                partner,
                metrics: program_metrics(snapshot, &program.id),
            })
        })
        .collect()
}

/// Scans institutions, teachers and projects for one program.
///
/// Teachers only count when their institution belongs to the program.
pub fn program_metrics(snapshot: &Snapshot, program_id: &str) -> ProgramMetrics {
    let institutions: Vec<&EducationalInstitution> = snapshot
        .institutions
        .iter()
        .filter(|institution| institution.program_id == program_id)
        .collect();
    let institution_ids: HashSet<&str> = institutions
        .iter()
        .map(|institution| institution.id.as_str())
        .collect();

    let teacher_count = snapshot
        .teachers
        .iter()
        .filter(|teacher| {
            teacher.program_id == program_id
                && institution_ids.contains(teacher.institution_id.as_str())
        })
        .count();

    let countries: HashSet<String> = institutions
        .iter()
        .map(|institution| institution.country.trim().to_ascii_uppercase())
        .filter(|country| !country.is_empty())
        .collect();

    let (mut active_project_count, mut completed_project_count) = (0, 0);
    for project in snapshot
        .projects
        .iter()
        .filter(|project| project.program_id == program_id)
    {
        match project.status {
            ProjectStatus::Active => active_project_count += 1,
            ProjectStatus::Completed => completed_project_count += 1,
            ProjectStatus::Draft => {}
        }
    }

    ProgramMetrics {
        institution_count: institutions.len(),
        teacher_count,
        student_count: institutions
            .iter()
            .map(|institution| u64::from(institution.student_count))
            .sum(),
        active_project_count,
        completed_project_count,
        country_count: countries.len(),
    }
}
