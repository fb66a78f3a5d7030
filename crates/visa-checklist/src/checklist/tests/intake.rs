use serde_json::json;

use super::common::*;

use crate::checklist::domain::{
    ApplicationMode, EconomicMaterial, FamilyRelation, GraduateStatus, HukouType, IdentityKind,
    ProcessMode, VisaDuration,
};
use crate::checklist::intake::{has_family, normalize_form, visa_duration};

#[test]
fn visa_duration_prefers_first_non_empty_field() {
    let cases = [
        (json!({}), VisaDuration::Single),
        (json!({ "visaDuration": "THREE" }), VisaDuration::Three),
        (json!({ "visaType": "five" }), VisaDuration::Five),
        (json!({ "visaDuration": "", "visaType": "五年多次" }), VisaDuration::Five),
        (json!({ "visaDuration": "THREE", "visaType": "FIVE" }), VisaDuration::Three),
        (json!({ "visaDuration": "TEN" }), VisaDuration::Single),
    ];

    for (raw, expected) in cases {
        assert_eq!(visa_duration(&form(raw.clone())), expected, "{raw}");
    }
}

#[test]
fn has_family_rules() {
    let cases = [
        (json!({}), ApplicationMode::Family, true),
        (json!({ "hasFamily": false }), ApplicationMode::Binding, true),
        (json!({}), ApplicationMode::Individual, false),
        (json!({ "hasFamily": true }), ApplicationMode::Individual, true),
        (json!({ "hasFamily": false, "has_family": true }), ApplicationMode::Individual, false),
        (json!({ "has_family": "True" }), ApplicationMode::Individual, true),
        (json!({ "has_family": "yes" }), ApplicationMode::Individual, false),
        (json!({ "hasFamily": 1 }), ApplicationMode::Economic, true),
        (json!({ "familyMembers": [{ "name": "李四" }] }), ApplicationMode::Individual, true),
        (json!({ "familyMembers": [] }), ApplicationMode::Individual, false),
    ];

    for (raw, application, expected) in cases {
        assert_eq!(
            has_family(&form(raw.clone()), application),
            expected,
            "{raw} / {application:?}"
        );
    }
}

#[test]
fn normalizes_every_dimension() {
    let intake = normalize_form(&form(json!({
        "applicantName": "  张三 ",
        "residenceConsulate": "Beijing",
        "hukouConsulate": " SHANGHAI ",
        "applicationType": "family",
        "processType": "tax",
        "identityType": "employed",
        "visaType": "THREE",
        "hukouType": "collective",
        "graduateStatus": "current",
        "economicMaterial": "deposit_five",
        "familyMembers": [
            { "name": "李四", "residenceConsulate": "beijing", "hukouConsulate": "Guangzhou",
              "identityType": "FREELANCE", "relation": "spouse" }
        ]
    })));

    let profile = intake.profile;
    assert!(intake.notes.is_empty());
    assert_eq!(profile.applicant_name.as_deref(), Some("张三"));
    assert_eq!(profile.residence_consulate, consulate("beijing"));
    assert_eq!(profile.hukou_consulate, consulate("shanghai"));
    assert_eq!(profile.application, ApplicationMode::Family);
    assert_eq!(profile.process, Some(ProcessMode::Tax));
    assert_eq!(profile.identity, Some(IdentityKind::Employed));
    assert_eq!(profile.visa_duration, VisaDuration::Three);
    assert_eq!(profile.hukou_type, Some(HukouType::Collective));
    assert_eq!(profile.graduate_status, GraduateStatus::Enrolled);
    assert_eq!(
        profile.economic_material,
        Some(EconomicMaterial::Deposit(VisaDuration::Five))
    );
    assert!(profile.has_family);

    let member = &profile.family_members[0];
    assert_eq!(member.hukou_consulate, consulate("guangzhou"));
    assert_eq!(member.identity, Some(IdentityKind::Freelancer));
    assert_eq!(member.relation, Some(FamilyRelation::Spouse));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let profile = normalize_form(&form(json!({ "residenceConsulate": "beijing" }))).profile;

    assert_eq!(profile.application, ApplicationMode::Individual);
    assert_eq!(profile.process, None);
    assert_eq!(profile.identity, None);
    assert_eq!(profile.hukou_consulate, None);
    assert_eq!(profile.hukou_type, Some(HukouType::Family));
    assert_eq!(profile.graduate_status, GraduateStatus::Unspecified);
    assert!(!profile.has_family);
    assert!(profile.family_members.is_empty());
}

#[test]
fn unknown_values_are_preserved_or_dropped() {
    let profile = normalize_form(&form(json!({
        "applicationType": "GROUP",
        "processType": "express",
        "identityType": "astronaut",
        "hukouType": "weird",
        "hukouConsulate": "   ",
        "familyVisaType": "TEN"
    })))
    .profile;

    assert_eq!(profile.application, ApplicationMode::Individual);
    assert_eq!(profile.process, Some(ProcessMode::Other));
    assert_eq!(profile.identity, Some(IdentityKind::Other));
    assert_eq!(profile.hukou_type, None);
    assert_eq!(profile.hukou_consulate, None);
    assert_eq!(profile.family_visa_duration, None);
}

#[test]
fn hukou_auto_means_family_register() {
    let profile = normalize_form(&form(json!({ "hukouType": "auto" }))).profile;
    assert_eq!(profile.hukou_type, Some(HukouType::Family));
}

#[test]
fn malformed_family_members_are_skipped_with_notes() {
    let intake = normalize_form(&form(json!({
        "applicationType": "FAMILY",
        "familyMembers": [
            "李四",
            { "name": "王五", "residenceConsulate": "beijing" },
            null
        ]
    })));

    assert_eq!(intake.profile.family_members.len(), 1);
    assert_eq!(
        intake.profile.family_members[0].name.as_deref(),
        Some("王五")
    );
    assert_eq!(
        intake.notes,
        lines(&[
            "family member #1 is not a record (string); skipped",
            "family member #3 is not a record (null); skipped",
        ])
    );
}

#[test]
fn non_list_family_members_are_ignored() {
    let intake = normalize_form(&form(json!({ "familyMembers": { "name": "李四" } })));

    assert!(intake.profile.family_members.is_empty());
    assert_eq!(
        intake.notes,
        lines(&["familyMembers is not a list (object); ignoring it"])
    );
}
