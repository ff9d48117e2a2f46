use partnerhub_core::model::institution::EducationalInstitution;
use partnerhub_core::model::program::Program;
use partnerhub_core::model::resource::{AvailabilityScope, ProgramResource};
use partnerhub_core::selectors::program_metrics;
use partnerhub_core::{
    build_program_catalog, build_teacher_context, get_resources_for_partner, CatalogOptions,
    MemoryBackend, PrototypeStore, Snapshot, SnapshotCache, StoreConfig,
};

fn ids(resources: &[&ProgramResource]) -> Vec<String> {
    resources.iter().map(|resource| resource.id.clone()).collect()
}

#[test]
fn empty_store_produces_empty_views() {
    let snapshot = Snapshot::default();
    assert!(build_program_catalog(&snapshot, &CatalogOptions::default()).is_empty());
    assert!(get_resources_for_partner(&[], "any-id").is_empty());
    assert!(build_teacher_context(&snapshot, "t@school.org").programs.is_empty());
}

#[test]
fn partner_owned_resource_is_hidden_from_other_partners() {
    let mut resource = ProgramResource::owned_by_partner("partner-a", "Lesson plan");
    resource.id = "r-a".to_string();
    let resources = vec![resource];

    assert_eq!(ids(&get_resources_for_partner(&resources, "partner-a")), ["r-a"]);
    assert!(get_resources_for_partner(&resources, "partner-b").is_empty());
}

#[test]
fn specific_partner_resource_is_visible_only_to_targets() {
    let mut resource = ProgramResource::owned_by_parent(
        "parent-tfa",
        "Coaching guide",
        AvailabilityScope::SpecificPartners,
        vec!["partner-a".to_string()],
    );
    resource.id = "r-specific".to_string();
    let resources = vec![resource];

    assert_eq!(
        ids(&get_resources_for_partner(&resources, "partner-a")),
        ["r-specific"]
    );
    assert!(get_resources_for_partner(&resources, "partner-b").is_empty());
}

#[test]
fn all_partner_resource_is_visible_to_everyone() {
    let resources = vec![ProgramResource::owned_by_parent(
        "parent-ja",
        "Fair rules",
        AvailabilityScope::AllPartners,
        Vec::new(),
    )];
    assert_eq!(get_resources_for_partner(&resources, "partner-a").len(), 1);
    assert_eq!(get_resources_for_partner(&resources, "partner-z").len(), 1);
}

#[test]
fn catalog_drops_programs_with_unknown_partner() {
    let mut snapshot = Snapshot::default();
    snapshot.programs.push(Program {
        id: "program-orphan".to_string(),
        ..Program::new("partner-gone", "Orphan")
    });
    assert!(build_program_catalog(&snapshot, &CatalogOptions::all_programs()).is_empty());
}

#[test]
fn catalog_metrics_follow_store_writes() {
    let store = PrototypeStore::new(MemoryBackend::new(), StoreConfig::default());
    let mut cache = SnapshotCache::mount(&store);
    let before = program_metrics(cache.snapshot(), "program-market-makers");
    assert_eq!(before.institution_count, 0);

    store
        .create(EducationalInstitution {
            program_id: "program-market-makers".to_string(),
            coordinator_id: "coord-none".to_string(),
            name: "Escola Paulista".to_string(),
            country: "br".to_string(),
            student_count: 300,
            ..EducationalInstitution::default()
        })
        .unwrap();

    assert!(cache.refresh_if_stale());
    let after = program_metrics(cache.snapshot(), "program-market-makers");
    assert_eq!(after.institution_count, 1);
    assert_eq!(after.student_count, 300);
    assert_eq!(after.country_count, 1);
    assert_eq!(after.teacher_count, 0);
}
