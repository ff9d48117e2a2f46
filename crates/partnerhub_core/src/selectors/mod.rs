//! Role-scoped view models derived from a loaded snapshot.
//!
//! # Responsibility
//! - Join and filter raw tables into denormalized, read-only views.
//!
//! # Invariants
//! - Selectors are pure: same snapshot in, same view out.
//! - Dangling foreign keys are dropped from results, never reported.
//! - An empty snapshot yields empty views, never an error.

pub mod catalog;
pub mod coordinator;
pub mod parent;
pub mod partner;
pub mod resources;
pub mod school;
pub mod session;
pub mod teacher;

pub use catalog::{
    build_program_catalog, program_metrics, CatalogOptions, ProgramCatalogEntry, ProgramMetrics,
};
pub use coordinator::{build_coordinator_context, CoordinatorAssignment, CoordinatorContext};
pub use parent::{
    build_parent_context, classify_parent_network, get_scoped_parent_partner_ids, ParentContext,
};
pub use partner::{build_partner_context, PartnerContext};
pub use resources::{get_resources_for_parent, get_resources_for_partner, is_visible_to_partner};
pub use school::{build_school_context, SchoolContext};
pub use session::normalize_email;
pub use teacher::{build_teacher_context, TeacherContext, TeacherProgramSummary};
