use super::common::*;

use crate::checklist::domain::{
    needs_residence_proof, ApplicantProfile, GraduateStatus, IdentityKind, ProcessMode,
};
use crate::checklist::generators::{residence_materials, ALL_REQUIRED_TITLE, CHOOSE_ONE_TITLE};

fn choose_one_options() -> Vec<String> {
    table()
        .residence_options()
        .iter()
        .enumerate()
        .map(|(index, option)| format!("{}. {option}", index + 1))
        .collect()
}

#[test]
fn needs_proof_is_symmetric_and_case_insensitive() {
    let codes = ["beijing", "shanghai", "guangzhou", "chengdu"];
    for a in codes {
        for b in codes {
            let forward = needs_residence_proof(consulate(a).as_ref(), consulate(b).as_ref());
            let backward = needs_residence_proof(consulate(b).as_ref(), consulate(a).as_ref());
            assert_eq!(forward, backward);
            assert_eq!(forward, a != b);
        }
    }

    assert!(!needs_residence_proof(
        consulate("Beijing").as_ref(),
        consulate("BEIJING").as_ref()
    ));
    assert!(!needs_residence_proof(consulate("beijing").as_ref(), None));
}

#[test]
fn matching_consulates_need_nothing_outside_family_mode() {
    assert!(residence_materials(&profile("beijing", "beijing"), &table()).is_empty());
    assert!(residence_materials(&profile("beijing", ""), &table()).is_empty());
}

#[test]
fn default_consulates_offer_a_choice() {
    let materials = residence_materials(&profile("beijing", "shanghai"), &table());

    let mut expected = vec![format!("{CHOOSE_ONE_TITLE}：")];
    expected.extend(choose_one_options());
    assert_eq!(materials, expected);
    assert!(materials[0].contains("选择一种即可"));
}

#[test]
fn shanghai_mismatch_requires_all_three_proofs() {
    let materials = residence_materials(&profile("shanghai", "beijing"), &table());

    assert_eq!(
        materials,
        vec![
            format!("{ALL_REQUIRED_TITLE}："),
            "1. 居住证双面复印件（上海居住证需额外附上密码）".to_string(),
            "2. 近期一年的社保（社保单最低要近期6个月缴纳在上海领区内）".to_string(),
            "3. 近期一年的纳税证明（税单最低要近期6个月缴纳在上海领区内）".to_string(),
        ]
    );
}

#[test]
fn enrolled_student_on_student_process_is_exempt() {
    let enrolled = ApplicantProfile {
        process: Some(ProcessMode::Student),
        identity: Some(IdentityKind::Student),
        graduate_status: GraduateStatus::Enrolled,
        ..profile("shanghai", "beijing")
    };
    assert!(residence_materials(&enrolled, &table()).is_empty());

    let graduated = ApplicantProfile {
        graduate_status: GraduateStatus::Graduated,
        ..enrolled
    };
    assert_eq!(residence_materials(&graduated, &table()).len(), 4);
}

#[test]
fn family_header_names_everyone_needing_proof_in_order() {
    let applicant = family_profile(
        "beijing",
        "beijing",
        vec![
            member(Some("李四"), "beijing", "shanghai", None),
            member(None, "beijing", "guangzhou", None),
            member(Some("王五"), "beijing", "", None),
            member(Some("赵六"), "beijing", "beijing", None),
        ],
    );

    let materials = residence_materials(&applicant, &table());
    assert_eq!(
        materials[0],
        format!("李四, 家庭成员2需要提供{CHOOSE_ONE_TITLE}：")
    );
    assert_eq!(&materials[1..], choose_one_options().as_slice());
}

#[test]
fn family_header_lists_main_applicant_first() {
    let applicant = family_profile(
        "shanghai",
        "beijing",
        vec![member(Some("李四"), "shanghai", "beijing", None)],
    );

    let materials = residence_materials(&applicant, &table());
    assert_eq!(
        materials[0],
        format!("主申请人, 李四需要提供{ALL_REQUIRED_TITLE}：")
    );
    assert_eq!(materials.len(), 4);
}

#[test]
fn family_without_anyone_needing_proof_still_emits_header_and_options() {
    let applicant = family_profile("beijing", "beijing", Vec::new());

    let materials = residence_materials(&applicant, &table());
    assert_eq!(materials[0], format!("{CHOOSE_ONE_TITLE}："));
    assert_eq!(materials.len(), 1 + table().residence_options().len());
}
