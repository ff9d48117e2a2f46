//! Deterministic sample dataset used to populate an empty store.
//!
//! Ids are readable slugs and timestamps are fixed, so two seeds always
//! produce byte-identical documents. The dataset covers every table, both
//! program visibilities, every resource scope, and one teacher membership
//! pointing at a program that does not exist.

use crate::model::institution::{CountryCoordinator, EducationalInstitution, InstitutionTeacher};
use crate::model::invitation::{InvitationKind, InvitationStatus, ProgramInvitation};
use crate::model::partner::{ParentNetwork, Partner, PartnerLevel, PartnerType, VerificationStatus};
use crate::model::program::{
    Program, ProgramProject, ProgramTemplate, ProgramVisibility, ProjectStatus,
};
use crate::model::resource::{AvailabilityScope, ProgramResource, ResourceOwnerRole};
use crate::model::{EpochMs, Snapshot};

/// 2025-01-01T00:00:00Z.
const SEED_BASE_MS: EpochMs = 1_735_689_600_000;
const DAY_MS: EpochMs = 86_400_000;

fn day(n: i64) -> EpochMs {
    SEED_BASE_MS + n * DAY_MS
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Builds the seed snapshot.
pub fn seed_snapshot() -> Snapshot {
    Snapshot {
        partners: seed_partners(),
        programs: seed_programs(),
        projects: seed_projects(),
        institutions: seed_institutions(),
        teachers: seed_teachers(),
        coordinators: seed_coordinators(),
        resources: seed_resources(),
        invitations: seed_invitations(),
        templates: seed_templates(),
        ..Snapshot::default()
    }
}

fn partner(
    id: &str,
    name: &str,
    kind: PartnerType,
    level: PartnerLevel,
    network: Option<ParentNetwork>,
    countries: &[&str],
) -> Partner {
    Partner {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        level,
        network,
        countries: strings(countries),
        languages: strings(&["en"]),
        verification_status: VerificationStatus::Verified,
        contact_email: None,
        created_at: day(0),
        updated_at: None,
    }
}

fn seed_partners() -> Vec<Partner> {
    use PartnerLevel::{Country, International};

    let tfa = Some(ParentNetwork::TeachForAll);
    let ja = Some(ParentNetwork::JuniorAchievement);
    let enactus = Some(ParentNetwork::Enactus);

    let mut partners = vec![
        partner("partner-tfa-global", "Teach For All", PartnerType::Ngo, International, tfa, &[]),
        partner("partner-tfa-kenya", "Teach For Kenya", PartnerType::Ngo, Country, tfa, &["KE"]),
        partner("partner-tfa-india", "Teach For India", PartnerType::Ngo, Country, tfa, &["IN"]),
        partner("partner-ja-worldwide", "JA Worldwide", PartnerType::Ngo, International, ja, &[]),
        partner("partner-ja-nigeria", "JA Nigeria", PartnerType::Ngo, Country, ja, &["NG"]),
        partner("partner-ja-brazil", "JA Brasil", PartnerType::Ngo, Country, ja, &["BR"]),
        partner("partner-enactus-mexico", "Enactus Mexico", PartnerType::University, Country, enactus, &["MX"]),
        partner("partner-ocean-school", "Ocean School Foundation", PartnerType::Foundation, International, None, &["DE", "TZ"]),
        partner("partner-codeclub", "Code Club Asia", PartnerType::Company, Country, None, &["PH"]),
    ];
    partners[6].verification_status = VerificationStatus::Pending;
    partners[8].languages = strings(&["en", "fil"]);
    partners
}

fn program(
    id: &str,
    partner_id: &str,
    name: &str,
    visibility: ProgramVisibility,
    sdg_focus: &[u8],
    created_day: i64,
) -> Program {
    Program {
        id: id.to_string(),
        partner_id: partner_id.to_string(),
        name: name.to_string(),
        description: format!("{name} for secondary schools."),
        visibility,
        sdg_focus: sdg_focus.to_vec(),
        languages: strings(&["en"]),
        age_range: Some("12-16".to_string()),
        created_at: day(created_day),
        updated_at: None,
    }
}

fn seed_programs() -> Vec<Program> {
    use ProgramVisibility::{Private, Public};

    vec![
        program("program-climate-classrooms", "partner-tfa-kenya", "Climate Classrooms", Public, &[4, 13], 1),
        program("program-young-entrepreneurs", "partner-ja-nigeria", "Young Entrepreneurs", Public, &[8], 2),
        program("program-ocean-literacy", "partner-ocean-school", "Ocean Literacy", Public, &[14], 3),
        program("program-coding-circles", "partner-codeclub", "Coding Circles", Private, &[4, 9], 4),
        program("program-market-makers", "partner-ja-brazil", "Market Makers", Public, &[8, 10], 5),
    ]
}

fn coordinator(id: &str, program_id: &str, email: &str, full_name: &str, region: &str) -> CountryCoordinator {
    CountryCoordinator {
        id: id.to_string(),
        program_id: program_id.to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        region: region.to_string(),
        created_at: day(6),
        updated_at: None,
    }
}

fn seed_coordinators() -> Vec<CountryCoordinator> {
    vec![
        coordinator("coord-ke-nairobi", "program-climate-classrooms", "amina.otieno@tfa-kenya.org", "Amina Otieno", "Nairobi"),
        coordinator("coord-ke-coast", "program-climate-classrooms", "joseph.mwangi@tfa-kenya.org", "Joseph Mwangi", "Coast"),
        coordinator("coord-ng-lagos", "program-young-entrepreneurs", "ngozi.okafor@ja-nigeria.org", "Ngozi Okafor", "Lagos"),
        coordinator("coord-ocean-baltic", "program-ocean-literacy", "lena.fischer@oceanschool.org", "Lena Fischer", "Baltic"),
        coordinator("coord-ocean-eastafrica", "program-ocean-literacy", "amina.otieno@tfa-kenya.org", "Amina Otieno", "East Africa"),
        coordinator("coord-code-manila", "program-coding-circles", "sam.reyes@codeclub.asia", "Sam Reyes", "Metro Manila"),
    ]
}

fn institution(
    id: &str,
    program_id: &str,
    coordinator_id: &str,
    name: &str,
    country: &str,
    city: &str,
    student_count: u32,
) -> EducationalInstitution {
    EducationalInstitution {
        id: id.to_string(),
        program_id: program_id.to_string(),
        coordinator_id: coordinator_id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        student_count,
        created_at: day(8),
        updated_at: None,
    }
}

fn seed_institutions() -> Vec<EducationalInstitution> {
    vec![
        institution("inst-nairobi-hill", "program-climate-classrooms", "coord-ke-nairobi", "Nairobi Hill Secondary", "KE", "Nairobi", 640),
        institution("inst-mombasa-bay", "program-climate-classrooms", "coord-ke-coast", "Mombasa Bay School", "KE", "Mombasa", 420),
        institution("inst-lagos-unity", "program-young-entrepreneurs", "coord-ng-lagos", "Lagos Unity College", "NG", "Lagos", 910),
        institution("inst-kiel-harbor", "program-ocean-literacy", "coord-ocean-baltic", "Kiel Harbor Gymnasium", "DE", "Kiel", 380),
        institution("inst-zanzibar-reef", "program-ocean-literacy", "coord-ocean-eastafrica", "Zanzibar Reef Academy", "TZ", "Stone Town", 290),
        institution("inst-manila-tech", "program-coding-circles", "coord-code-manila", "Manila Tech High", "PH", "Manila", 510),
    ]
}

fn teacher(id: &str, institution_id: &str, program_id: &str, email: &str, full_name: &str) -> InstitutionTeacher {
    InstitutionTeacher {
        id: id.to_string(),
        institution_id: institution_id.to_string(),
        program_id: program_id.to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        subject: None,
        created_at: day(10),
        updated_at: None,
    }
}

fn seed_teachers() -> Vec<InstitutionTeacher> {
    let mut teachers = vec![
        teacher("teacher-grace-nairobi", "inst-nairobi-hill", "program-climate-classrooms", "grace.wanjiru@nairobihill.ac.ke", "Grace Wanjiru"),
        teacher("teacher-peter-nairobi", "inst-nairobi-hill", "program-climate-classrooms", "peter.kamau@nairobihill.ac.ke", "Peter Kamau"),
        teacher("teacher-fatma-mombasa", "inst-mombasa-bay", "program-climate-classrooms", "fatma.ali@mombasabay.ac.ke", "Fatma Ali"),
        teacher("teacher-tunde-lagos", "inst-lagos-unity", "program-young-entrepreneurs", "tunde.bello@lagosunity.edu.ng", "Tunde Bello"),
        teacher("teacher-jonas-kiel", "inst-kiel-harbor", "program-ocean-literacy", "jonas.becker@kielharbor.de", "Jonas Becker"),
        teacher("teacher-grace-zanzibar", "inst-zanzibar-reef", "program-ocean-literacy", "grace.wanjiru@nairobihill.ac.ke", "Grace Wanjiru"),
        teacher("teacher-maria-manila", "inst-manila-tech", "program-coding-circles", "maria.santos@manilatech.ph", "Maria Santos"),
        teacher("teacher-grace-archived", "inst-archived-school", "program-retired-pilot", "grace.wanjiru@nairobihill.ac.ke", "Grace Wanjiru"),
    ];
    teachers[0].subject = Some("Geography".to_string());
    teachers[4].subject = Some("Biology".to_string());
    teachers
}

fn project(id: &str, program_id: &str, institution_id: &str, title: &str, status: ProjectStatus, created_day: i64) -> ProgramProject {
    ProgramProject {
        id: id.to_string(),
        program_id: program_id.to_string(),
        institution_id: Some(institution_id.to_string()),
        title: title.to_string(),
        status,
        created_at: day(created_day),
        updated_at: None,
    }
}

fn seed_projects() -> Vec<ProgramProject> {
    use ProjectStatus::{Active, Completed, Draft};

    vec![
        project("project-carbon-audit", "program-climate-classrooms", "inst-nairobi-hill", "School garden carbon audit", Active, 12),
        project("project-mangroves", "program-climate-classrooms", "inst-mombasa-bay", "Mangrove monitoring", Completed, 13),
        project("project-mini-company", "program-young-entrepreneurs", "inst-lagos-unity", "Student mini-company", Active, 14),
        project("project-microplastics", "program-ocean-literacy", "inst-kiel-harbor", "Microplastics survey", Completed, 15),
        project("project-reef-journal", "program-ocean-literacy", "inst-zanzibar-reef", "Reef journal", Draft, 16),
        project("project-weather-app", "program-coding-circles", "inst-manila-tech", "Weather app", Active, 17),
    ]
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    owner_role: ResourceOwnerRole,
    owner_id: &str,
    scope: AvailabilityScope,
    targets: &[&str],
    created_day: i64,
    updated_day: Option<i64>,
) -> ProgramResource {
    ProgramResource {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        owner_role,
        owner_id: owner_id.to_string(),
        program_id: None,
        availability_scope: scope,
        target_partner_ids: strings(targets),
        sdg_tags: Vec::new(),
        audience_tags: strings(&["teachers"]),
        url: None,
        created_at: day(created_day),
        updated_at: updated_day.map(day),
    }
}

fn seed_resources() -> Vec<ProgramResource> {
    use AvailabilityScope::{AllPartners, Organization, SpecificPartners};
    use ResourceOwnerRole as Owner;

    let mut resources = vec![
        resource("res-climate-lessons", "Climate lesson pack", Owner::Partner, "partner-tfa-kenya", Organization, &[], 20, Some(30)),
        resource("res-business-canvas", "Business model canvas worksheet", Owner::Partner, "partner-ja-nigeria", Organization, &[], 21, None),
        resource("res-leadership-toolkit", "Teacher leadership toolkit", Owner::Parent, "parent-tfa", AllPartners, &[], 22, None),
        resource("res-coaching-guide", "Regional coaching guide", Owner::Parent, "parent-tfa", SpecificPartners, &["partner-tfa-kenya", "partner-tfa-india"], 23, Some(25)),
        resource("res-fair-playbook", "Company fair playbook", Owner::Parent, "parent-ja", SpecificPartners, &["partner-ja-brazil"], 24, None),
        resource("res-ocean-field-guide", "Ocean field guide", Owner::Partner, "partner-ocean-school", Organization, &[], 26, None),
    ];
    resources[0].program_id = Some("program-climate-classrooms".to_string());
    resources[0].sdg_tags = vec![13];
    resources[5].program_id = Some("program-ocean-literacy".to_string());
    resources[5].sdg_tags = vec![14];
    resources[5].audience_tags = strings(&["teachers", "students"]);
    resources
}

fn invitation(id: &str, program_id: &str, kind: InvitationKind, email: &str, status: InvitationStatus) -> ProgramInvitation {
    ProgramInvitation {
        id: id.to_string(),
        program_id: program_id.to_string(),
        kind,
        email: email.to_string(),
        status,
        message: None,
        created_at: day(28),
        updated_at: None,
    }
}

fn seed_invitations() -> Vec<ProgramInvitation> {
    use InvitationStatus::{Accepted, Declined, Pending};

    vec![
        invitation("inv-kisumu-girls", "program-climate-classrooms", InvitationKind::Institution, "head@kisumugirls.ac.ke", Pending),
        invitation("inv-nairobi-teacher", "program-climate-classrooms", InvitationKind::Teacher, "new.teacher@nairobihill.ac.ke", Accepted),
        invitation("inv-abuja-lead", "program-young-entrepreneurs", InvitationKind::Coordinator, "abuja.lead@ja-nigeria.org", Pending),
        invitation("inv-ocean-partner", "program-ocean-literacy", InvitationKind::Partner, "hello@bluefuture.org", Declined),
    ]
}

fn template(id: &str, program_id: &str, title: &str) -> ProgramTemplate {
    ProgramTemplate {
        id: id.to_string(),
        program_id: program_id.to_string(),
        title: title.to_string(),
        description: String::new(),
        created_at: day(29),
        updated_at: None,
    }
}

fn seed_templates() -> Vec<ProgramTemplate> {
    vec![
        template("tpl-carbon-audit", "program-climate-classrooms", "Carbon audit template"),
        template("tpl-company-charter", "program-young-entrepreneurs", "Mini-company charter"),
        template("tpl-field-log", "program-ocean-literacy", "Field survey log"),
    ]
}
