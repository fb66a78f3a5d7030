use tracing::{debug, info};

use super::super::domain::{
    ApplicantProfile, ApplicationMode, GraduateStatus, IdentityKind, ProcessMode, SHANGHAI,
};
use super::super::requirements::RequirementTable;

pub(crate) const ALL_REQUIRED_TITLE: &str = "以下居住证明材料（全部需要提供）";
pub(crate) const CHOOSE_ONE_TITLE: &str = "以下居住证明材料（选择一种即可）";
pub(crate) const MAIN_APPLICANT: &str = "主申请人";

const SHANGHAI_PROOFS: [&str; 3] = [
    "居住证双面复印件（上海居住证需额外附上密码）",
    "近期一年的社保（社保单最低要近期6个月缴纳在上海领区内）",
    "近期一年的纳税证明（税单最低要近期6个月缴纳在上海领区内）",
];

/// Main-applicant residence proof after the enrolled-student exemption.
pub(crate) fn main_applicant_needs_proof(profile: &ApplicantProfile) -> bool {
    let enrolled_student = profile.is_process(ProcessMode::Student)
        && profile.is_identity(IdentityKind::Student)
        && profile.graduate_status == GraduateStatus::Enrolled;
    if enrolled_student {
        return false;
    }
    profile.main_needs_residence_proof()
}

pub(crate) fn residence_materials(
    profile: &ApplicantProfile,
    table: &RequirementTable,
) -> Vec<String> {
    let main_needs_proof = main_applicant_needs_proof(profile);
    let family_mode = profile.application == ApplicationMode::Family;
    if !main_needs_proof && !family_mode {
        return Vec::new();
    }

    let shanghai_mismatch =
        profile.resides_in(SHANGHAI) && profile.residence_consulate != profile.hukou_consulate;
    let (title, options) = if shanghai_mismatch {
        (
            ALL_REQUIRED_TITLE,
            SHANGHAI_PROOFS.iter().map(|item| item.to_string()).collect(),
        )
    } else {
        (CHOOSE_ONE_TITLE, table.residence_options())
    };

    let header = if family_mode {
        let people = people_needing_proof(profile, main_needs_proof);
        if people.is_empty() {
            info!("no household member needs residence proof");
            format!("{title}：")
        } else {
            format!("{}需要提供{title}：", people.join(", "))
        }
    } else {
        format!("{title}：")
    };

    let mut materials = vec![header];
    materials.extend(
        options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("{}. {option}", index + 1)),
    );

    debug!(
        shanghai_mismatch,
        family_mode,
        count = materials.len(),
        "residence materials resolved"
    );
    materials
}

/// Main applicant first, then members in form order; members missing a consulate are skipped.
fn people_needing_proof(profile: &ApplicantProfile, main_needs_proof: bool) -> Vec<String> {
    let mut people = Vec::new();
    if main_needs_proof {
        people.push(MAIN_APPLICANT.to_string());
    }
    for (index, member) in profile.family_members.iter().enumerate() {
        if member.needs_residence_proof() {
            people.push(member.display_name(index + 1));
        }
    }
    people
}
