use tracing::debug;

use super::super::domain::{ApplicantProfile, ApplicationMode, IdentityKind};

pub(crate) fn family_materials(profile: &ApplicantProfile) -> Vec<String> {
    if profile.application == ApplicationMode::Binding || !profile.has_family {
        return Vec::new();
    }

    if profile.application == ApplicationMode::Family {
        return household_materials(profile);
    }

    let mut materials = Vec::new();
    if profile.main_needs_residence_proof() {
        materials.push("所有家属也需要提供居住证明材料".to_string());
    }
    materials.push("所有家属需要准备与主申请人相同的基本材料".to_string());
    materials.push("需提供与主申请人的关系证明（结婚证/出生证明等）".to_string());
    materials
}

/// Lead lines plus member-specific requirements; retired and freelance members surface in
/// the other-materials section instead.
fn household_materials(profile: &ApplicantProfile) -> Vec<String> {
    let mut materials = vec![
        "1. 基本材料内的1、2、3、4项目".to_string(),
        "2. 与主申请人的关系证明".to_string(),
    ];

    for (index, member) in profile.family_members.iter().enumerate() {
        let name = member.display_name(index + 1);
        let requirement = match member.identity {
            Some(IdentityKind::Student) => format!("{name}需要提供学信网在线学籍验证报告"),
            Some(IdentityKind::Child) => format!("{name}需要由监护人陪同并提供监护关系证明"),
            other => {
                debug!(member = %name, identity = ?other, "no family-section requirement");
                continue;
            }
        };
        materials.push(format!("{}. {requirement}", materials.len() + 1));
    }

    materials
}
