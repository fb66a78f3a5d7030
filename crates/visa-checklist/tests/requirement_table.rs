//! Requirement table loading through the public API: JSON files on disk, partial overrides,
//! and the effect of a custom table on generated checklists.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use visa_checklist::checklist::{
    ApplicantProfile, ConsulateCode, IdentityKind, ProcessMode, RequirementTableError,
    VisaDuration,
};
use visa_checklist::{ChecklistEngine, RequirementTable, SectionKind};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("visa-checklist-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write scratch file");
    path
}

fn beijing_applicant() -> ApplicantProfile {
    ApplicantProfile {
        residence_consulate: ConsulateCode::parse("beijing"),
        hukou_consulate: ConsulateCode::parse("beijing"),
        identity: Some(IdentityKind::Employed),
        process: Some(ProcessMode::Normal),
        visa_duration: VisaDuration::Three,
        ..ApplicantProfile::default()
    }
}

#[test]
fn standard_table_survives_a_json_file_round_trip() {
    let json = serde_json::to_string_pretty(&RequirementTable::standard()).expect("serializes");
    let path = scratch_file("standard.json", &json);

    let loaded = RequirementTable::from_path(&path).expect("loads");
    assert_eq!(loaded, RequirementTable::standard());
}

#[test]
fn custom_table_drives_generated_lines() {
    let path = scratch_file(
        "custom.json",
        r#"{
            "basicMaterials": { "all": ["护照原件", "签证申请表"] },
            "identityMaterials": { "EMPLOYED": ["在职证明"] },
            "visaRequirements": {
                "THREE": { "bankBalance": { "amount": 300000 }, "taxAmount": { "amount": 8000 } }
            },
            "economicMaterials": { "bankStatement": { "supportedBanks": ["招商银行"] } }
        }"#,
    );
    let table = RequirementTable::from_path(&path).expect("loads");
    let engine = ChecklistEngine::new(Arc::new(table));

    let list = engine.generate(&beijing_applicant());
    assert_eq!(
        list.get(SectionKind::BasicMaterials),
        Some(["护照原件".to_string(), "签证申请表".to_string()].as_slice())
    );
    assert_eq!(
        list.get(SectionKind::EmploymentProof),
        Some(["在职证明".to_string()].as_slice())
    );
    assert_eq!(
        list.get(SectionKind::FinancialProof),
        Some(
            [
                "存款证明：需提供30万以上的存款证明（招商银行等银行可出具）".to_string(),
                "税单要求：近一年的个人所得税税单，金额超过0.8万".to_string(),
            ]
            .as_slice()
        )
    );
    assert!(!list.contains(SectionKind::ResidenceProof));
}

#[test]
fn empty_table_still_generates_a_checklist() {
    let engine = ChecklistEngine::new(Arc::new(RequirementTable::default()));

    let list = engine.generate(&beijing_applicant());
    assert!(list.contains(SectionKind::BasicInfo));
    assert!(list.contains(SectionKind::OtherMaterials));
    assert!(!list.contains(SectionKind::FinancialProof));
}

#[test]
fn missing_file_reports_io_error() {
    let err = RequirementTable::from_path("/nonexistent/visa-requirements.json")
        .expect_err("missing file");
    assert!(matches!(err, RequirementTableError::Io(_)));
}

#[test]
fn malformed_json_reports_parse_error() {
    let err = RequirementTable::from_reader("{ not json".as_bytes()).expect_err("malformed");
    assert!(matches!(err, RequirementTableError::Parse(_)));
    assert!(err.to_string().contains("requirement table"));
}
