use tracing::debug;

use super::super::domain::{
    ApplicantProfile, ApplicationMode, FamilyRelation, IdentityKind, SHANGHAI,
};
use super::super::requirements::RequirementTable;

const SHANGHAI_BASELINE: [&str; 4] = [
    "护照原件+首页彩色复印件（剩余有效期大于7个月）",
    "签证申请表（双面打印）",
    "小两寸（3.5cmx4.5cm）白底证件照（近期6个月内拍摄）",
    "户口本复印件（家庭户：户首页+户主页+本人页）",
];

const HOLDER_PASSPORT: &str = "签证持有人的护照首页复印件 + 签证页复印件";

pub(crate) fn basic_materials(profile: &ApplicantProfile, table: &RequirementTable) -> Vec<String> {
    let mut materials = if profile.resides_in(SHANGHAI) {
        let mut materials: Vec<String> =
            SHANGHAI_BASELINE.iter().map(|item| item.to_string()).collect();
        if profile.is_identity(IdentityKind::Employed) {
            materials.push("在职证明（原件）".to_string());
        }
        materials
    } else {
        let mut materials = table.basic_baseline();
        // An unrecognized register type leaves the item untouched.
        let clause = profile
            .hukou_type
            .and_then(|hukou_type| table.hukou_clause(hukou_type));
        if let Some(clause) = clause {
            if let Some(item) = materials.iter_mut().find(|item| item.contains("户口本")) {
                *item = format!("{item}（{clause}）");
            }
        }
        materials
    };

    if profile.application == ApplicationMode::Binding {
        materials.push(HOLDER_PASSPORT.to_string());
        materials.push(binding_relationship_proof(profile.family_relation).to_string());
    }

    debug!(count = materials.len(), "basic materials resolved");
    materials
}

fn binding_relationship_proof(relation: Option<FamilyRelation>) -> &'static str {
    match relation {
        Some(FamilyRelation::Spouse) => "与签证持有人的关系证明材料（结婚证/户口本）",
        Some(FamilyRelation::Parent) => "与签证持有人的关系证明材料（子女出生证明/户口本）",
        Some(FamilyRelation::Child) => "与签证持有人的关系证明材料（出生证明/户口本）",
        _ => "与签证持有人的关系证明材料（结婚证/户口本/出生证明等）",
    }
}
