use tracing::debug;

use super::super::domain::{ApplicantProfile, IdentityKind, ProcessMode};
use super::super::requirements::RequirementTable;

/// Occupation-specific proofs with the process-mode suppression rules applied.
pub(crate) fn identity_materials(
    profile: &ApplicantProfile,
    table: &RequirementTable,
) -> Vec<String> {
    let Some(identity) = profile.identity else {
        return Vec::new();
    };

    let student_academics = matches!(
        profile.process,
        Some(ProcessMode::Normal | ProcessMode::Simplified)
    ) && identity == IdentityKind::Student;
    if profile.is_process(ProcessMode::Student) || student_academics {
        debug!(?identity, "identity materials handled by the student track");
        return Vec::new();
    }

    let configured = table.identity_materials(identity);
    match identity {
        // Tax statements move to the financial and other sections once a process is chosen.
        IdentityKind::Employed if profile.process.is_some() => configured
            .into_iter()
            .filter(|item| !item.contains("税单"))
            .collect(),
        IdentityKind::Freelancer if profile.is_process(ProcessMode::Tax) => configured
            .into_iter()
            .filter(|item| !item.contains("个税app"))
            .collect(),
        _ => configured,
    }
}
