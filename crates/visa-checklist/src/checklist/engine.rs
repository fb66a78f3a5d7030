use std::sync::Arc;

use tracing::debug;

use super::domain::{
    consulate_display, ApplicantProfile, ApplicationMode, IdentityKind, ProcessMode, VisaDuration,
};
use super::generators::{
    basic_materials, family_materials, financial_materials, identity_materials, other_materials,
    residence_materials, StudentTrack,
};
use super::requirements::RequirementTable;
use super::sections::{DocumentList, SectionKind};

const HOUSEHOLD_RESIDENCE_NOTE: &str = "持签人家属需提供上述居住材料之一";

/// Coordinator running every section generator against a shared requirement table.
#[derive(Debug, Clone)]
pub struct ChecklistEngine {
    table: Arc<RequirementTable>,
}

impl ChecklistEngine {
    pub fn new(table: Arc<RequirementTable>) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(RequirementTable::standard()))
    }

    pub fn table(&self) -> &RequirementTable {
        &self.table
    }

    /// Derive the ordered checklist for one applicant. Total over every profile shape.
    pub fn generate(&self, profile: &ApplicantProfile) -> DocumentList {
        let table = self.table.as_ref();
        let track = StudentTrack::new(table);
        let mut list = DocumentList::new();

        list.insert(SectionKind::BasicInfo, basic_info(profile));
        list.insert(SectionKind::BasicMaterials, basic_materials(profile, table));

        match profile.process {
            Some(ProcessMode::Student) => {
                let (kind, lines) = track.section(profile);
                list.insert(kind, lines);
            }
            Some(ProcessMode::Normal | ProcessMode::Simplified)
                if profile.is_identity(IdentityKind::Student) =>
            {
                list.insert(SectionKind::AcademicProof, track.enrollment_section(profile));
            }
            _ if profile.application == ApplicationMode::Economic => {}
            _ => {
                let materials = identity_materials(profile, table);
                match profile.identity {
                    Some(IdentityKind::Student) => {
                        list.insert(SectionKind::AcademicProof, materials);
                    }
                    Some(IdentityKind::Employed) => {
                        list.insert(SectionKind::EmploymentProof, materials);
                    }
                    other => {
                        debug!(identity = ?other, "identity has no dedicated section");
                    }
                }
            }
        }

        // Holder income and relative proofs survive the student process.
        let financial_applies = !profile.is_process(ProcessMode::Student)
            || matches!(
                profile.application,
                ApplicationMode::Binding | ApplicationMode::Economic
            );
        if financial_applies {
            list.insert(SectionKind::FinancialProof, financial_materials(profile, table));
        }

        list.insert(SectionKind::ResidenceProof, residence_materials(profile, table));
        let dependents_need_note = !matches!(
            profile.application,
            ApplicationMode::Family | ApplicationMode::Binding
        ) && profile.has_family
            && profile.main_needs_residence_proof();
        if dependents_need_note {
            list.append_to(SectionKind::ResidenceProof, HOUSEHOLD_RESIDENCE_NOTE);
        }

        if profile.application != ApplicationMode::Binding {
            list.insert(SectionKind::FamilyMaterials, family_materials(profile));
        }
        list.insert(SectionKind::OtherMaterials, other_materials(profile));

        debug!(sections = ?list.kinds(), "checklist generated");
        list
    }
}

fn basic_info(profile: &ApplicantProfile) -> Vec<String> {
    let mut lines = vec![
        format!(
            "居住地领区: {}",
            consulate_display(profile.residence_consulate.as_ref())
        ),
        format!(
            "户籍所在地领区: {}",
            consulate_display(profile.hukou_consulate.as_ref())
        ),
        format!("申请类型: {}", visa_type_text(profile)),
    ];

    if profile.application == ApplicationMode::Binding {
        lines.push(format!("家属签证类型: {}", holder_visa_label(profile.family_visa_duration)));
    }
    lines
}

/// Display text for the visa being applied for, including BINDING holder phrasing.
pub fn visa_type_text(profile: &ApplicantProfile) -> String {
    if profile.application == ApplicationMode::Binding {
        let relation = profile
            .family_relation
            .map(|relation| relation.label())
            .unwrap_or_default();
        return format!(
            "申请人是{}持有人的{relation}",
            holder_visa_label(Some(profile.visa_duration))
        );
    }

    match profile.process {
        Some(ProcessMode::Simplified) => "三年多次签证（新政简化）".to_string(),
        Some(ProcessMode::Student) => "单次签证（学生专用）".to_string(),
        _ => profile.visa_duration.label().to_string(),
    }
}

/// Holders carry multi-entry visas; anything but THREE reads as five-year.
fn holder_visa_label(duration: Option<VisaDuration>) -> &'static str {
    match duration {
        Some(VisaDuration::Three) => VisaDuration::Three.label(),
        _ => VisaDuration::Five.label(),
    }
}
