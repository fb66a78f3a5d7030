//! Questionnaire normalization.
//!
//! The web form has shipped under several field names and value encodings over time, so
//! every dimension is resolved here once and the generators only ever see closed enums.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::domain::{
    ApplicantProfile, ApplicationMode, ConsulateCode, EconomicMaterial, FamilyMember,
    FamilyRelation, GraduateStatus, HukouType, IdentityKind, ProcessMode, VisaDuration,
};

const VISA_DURATION_FIELDS: [&str; 2] = ["visaDuration", "visaType"];
const HAS_FAMILY_FIELDS: [&str; 3] = ["hasFamily", "has_family", "familyMembers"];

/// Normalized profile together with any diagnostics raised while reading the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intake {
    pub profile: ApplicantProfile,
    pub notes: Vec<String>,
}

/// Build an [`ApplicantProfile`] from a raw questionnaire object. Never fails.
pub fn normalize_form(form: &Map<String, Value>) -> Intake {
    let mut notes = Vec::new();

    let application = ApplicationMode::parse(text_field(form, "applicationType"));
    let family_members = read_family_members(form, &mut notes);

    let profile = ApplicantProfile {
        applicant_name: non_empty(text_field(form, "applicantName")),
        residence_consulate: ConsulateCode::parse(text_field(form, "residenceConsulate")),
        hukou_consulate: ConsulateCode::parse(text_field(form, "hukouConsulate")),
        application,
        process: ProcessMode::parse(text_field(form, "processType")),
        identity: IdentityKind::parse(text_field(form, "identityType")),
        visa_duration: visa_duration(form),
        hukou_type: HukouType::parse(text_field(form, "hukouType")),
        family_relation: FamilyRelation::parse(text_field(form, "familyRelation")),
        family_visa_duration: VisaDuration::from_token(text_field(form, "familyVisaType")),
        graduate_status: GraduateStatus::parse(text_field(form, "graduateStatus")),
        economic_material: EconomicMaterial::parse(text_field(form, "economicMaterial")),
        has_family: has_family(form, application),
        family_members,
    };

    debug!(
        application = ?profile.application,
        process = ?profile.process,
        identity = ?profile.identity,
        visa = ?profile.visa_duration,
        members = profile.family_members.len(),
        "normalized applicant questionnaire"
    );

    Intake { profile, notes }
}

/// First non-empty of `visaDuration`/`visaType`, defaulting to single entry.
pub fn visa_duration(form: &Map<String, Value>) -> VisaDuration {
    VISA_DURATION_FIELDS
        .iter()
        .map(|field| text_field(form, field))
        .find(|value| !value.is_empty())
        .and_then(VisaDuration::from_token)
        .unwrap_or_default()
}

/// BINDING and FAMILY always have family; otherwise the first present flag field decides.
pub fn has_family(form: &Map<String, Value>, application: ApplicationMode) -> bool {
    if matches!(application, ApplicationMode::Family | ApplicationMode::Binding) {
        return true;
    }

    for field in HAS_FAMILY_FIELDS {
        let Some(value) = form.get(field) else {
            continue;
        };
        match value {
            Value::Bool(flag) => return *flag,
            Value::Array(items) if !items.is_empty() => return true,
            Value::String(text) if matches!(text.as_str(), "true" | "True" | "1") => return true,
            Value::Number(number) if number.as_i64() == Some(1) => return true,
            _ => {}
        }
    }

    false
}

fn read_family_members(form: &Map<String, Value>, notes: &mut Vec<String>) -> Vec<FamilyMember> {
    let entries = match form.get("familyMembers") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            let note = format!("familyMembers is not a list ({}); ignoring it", kind_of(other));
            warn!("{note}");
            notes.push(note);
            return Vec::new();
        }
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Object(member) => Some(FamilyMember {
                name: non_empty(text_field(member, "name")),
                residence_consulate: ConsulateCode::parse(text_field(member, "residenceConsulate")),
                hukou_consulate: ConsulateCode::parse(text_field(member, "hukouConsulate")),
                identity: IdentityKind::parse(text_field(member, "identityType")),
                relation: FamilyRelation::parse(text_field(member, "relation")),
            }),
            other => {
                let note = format!(
                    "family member #{} is not a record ({}); skipped",
                    index + 1,
                    kind_of(other)
                );
                warn!("{note}");
                notes.push(note);
                None
            }
        })
        .collect()
}

fn text_field<'a>(form: &'a Map<String, Value>, key: &str) -> &'a str {
    form.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
