//! Visa document checklist derivation.
//!
//! A questionnaire is normalized into an [`ApplicantProfile`], every section generator runs
//! against the shared [`RequirementTable`], and the [`ChecklistEngine`] assembles the
//! results into a [`DocumentList`] in canonical section order.

pub mod domain;
pub mod engine;
mod generators;
pub mod intake;
pub mod render;
pub mod requirements;
pub mod risk;
pub mod router;
pub mod sections;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    consulate_display, needs_residence_proof, ApplicantProfile, ApplicationMode, ConsulateCode,
    EconomicMaterial, FamilyMember, FamilyRelation, GraduateStatus, HukouType, IdentityKind,
    ProcessMode, VisaDuration,
};
pub use engine::{visa_type_text, ChecklistEngine};
pub use intake::{normalize_form, Intake};
pub use render::{ChecklistRenderer, HtmlRenderer, RenderError, RenderFormat, TextRenderer};
pub use requirements::{RequirementTable, RequirementTableError, RiskGuide};
pub use risk::{assess_risk, RiskAssessment, RiskFactor};
pub use router::checklist_router;
pub use sections::{DocumentList, SectionKind};
pub use service::{ChecklistOutcome, ChecklistService, ChecklistServiceError, RenderedChecklist};
