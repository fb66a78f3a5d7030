use tracing::debug;

use super::super::domain::{
    ApplicantProfile, ApplicationMode, IdentityKind, ProcessMode, BEIJING, SHANGHAI,
};
use super::residence::MAIN_APPLICANT;

const PHOTO_LINE: &str = "和纸质照片一致的电子版照片";

pub(crate) fn other_materials(profile: &ApplicantProfile) -> Vec<String> {
    let mut items = vec![PHOTO_LINE.to_string()];

    let normal_process = matches!(
        profile.process,
        None | Some(ProcessMode::Normal | ProcessMode::Other)
    );
    if profile.resides_in(BEIJING) && profile.is_identity(IdentityKind::Employed) && normal_process {
        let prefix = if profile.application == ApplicationMode::Family {
            "主申请人需要提供："
        } else {
            ""
        };
        items.push(format!("{prefix}近一年的个人所得税税单（从去年到今年相同月份）"));
        items.push(format!(
            "{prefix}如果税单右下角盖章是在外领区，需要额外提供领区内的营业执照副本复印件"
        ));
    }

    let retirees = retirees(profile);
    if !retirees.is_empty() {
        items.push(format!("{}需要提供退休证复印件", retirees.join(", ")));
    }

    let freelancers = holders_of(profile, IdentityKind::Freelancer);
    if !freelancers.is_empty() {
        items.push(format!(
            "{}需要写自由职业情况说明+情况说明相关证明材料",
            freelancers.join(", ")
        ));
    }

    debug!(count = items.len(), "other materials resolved");
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {item}", index + 1))
        .collect()
}

/// Shanghai only asks the main applicant; every other consulate asks the whole household.
fn retirees(profile: &ApplicantProfile) -> Vec<String> {
    if profile.resides_in(SHANGHAI) {
        if profile.is_identity(IdentityKind::Retired) {
            vec![MAIN_APPLICANT.to_string()]
        } else {
            Vec::new()
        }
    } else {
        holders_of(profile, IdentityKind::Retired)
    }
}

fn holders_of(profile: &ApplicantProfile, identity: IdentityKind) -> Vec<String> {
    let mut holders = Vec::new();
    if profile.is_identity(identity) {
        holders.push(MAIN_APPLICANT.to_string());
    }
    for (index, member) in profile.family_members.iter().enumerate() {
        if member.has_identity(identity) {
            holders.push(member.display_name(index + 1));
        }
    }
    holders
}
