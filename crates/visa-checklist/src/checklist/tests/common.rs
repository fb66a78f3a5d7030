use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::{Map, Value};

use crate::checklist::domain::{
    ApplicantProfile, ApplicationMode, ConsulateCode, FamilyMember, HukouType, IdentityKind,
    ProcessMode,
};
use crate::checklist::requirements::RequirementTable;
use crate::checklist::{checklist_router, ChecklistEngine, ChecklistService};

pub(super) fn table() -> RequirementTable {
    RequirementTable::standard()
}

pub(super) fn engine() -> ChecklistEngine {
    ChecklistEngine::standard()
}

pub(super) fn consulate(code: &str) -> Option<ConsulateCode> {
    ConsulateCode::parse(code)
}

/// Individual applicant with a family household register.
pub(super) fn profile(residence: &str, hukou: &str) -> ApplicantProfile {
    ApplicantProfile {
        residence_consulate: consulate(residence),
        hukou_consulate: consulate(hukou),
        hukou_type: Some(HukouType::Family),
        ..ApplicantProfile::default()
    }
}

pub(super) fn employed(residence: &str, hukou: &str, process: Option<ProcessMode>) -> ApplicantProfile {
    ApplicantProfile {
        identity: Some(IdentityKind::Employed),
        process,
        ..profile(residence, hukou)
    }
}

pub(super) fn family_profile(
    residence: &str,
    hukou: &str,
    members: Vec<FamilyMember>,
) -> ApplicantProfile {
    ApplicantProfile {
        application: ApplicationMode::Family,
        has_family: true,
        family_members: members,
        ..profile(residence, hukou)
    }
}

pub(super) fn member(
    name: Option<&str>,
    residence: &str,
    hukou: &str,
    identity: Option<IdentityKind>,
) -> FamilyMember {
    FamilyMember {
        name: name.map(str::to_string),
        residence_consulate: consulate(residence),
        hukou_consulate: consulate(hukou),
        identity,
        relation: None,
    }
}

pub(super) fn form(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

pub(super) fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn service() -> Arc<ChecklistService> {
    Arc::new(ChecklistService::new(Arc::new(table())))
}

pub(super) fn router() -> Router {
    checklist_router(service())
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
