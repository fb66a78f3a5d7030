//! Overstay-risk screening run alongside checklist generation.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::requirements::{RequirementTable, RiskGuide};

const LOW_EDUCATION_LEVELS: [&str; 4] = ["HIGH_SCHOOL", "JUNIOR_HIGH", "PRIMARY", "NONE"];
const HIGH_RISK_HUKOU: [&str; 2] = ["REMOTE", "FARMING"];

const HIGH_RISK_MATERIALS: [&str; 5] = [
    "详细的行程计划（包含每日具体安排）",
    "住宿预订证明",
    "往返机票预订证明",
    "在职证明原件（需加盖公章，注明职位、入职时间、准假时间）",
    "最近6个月的详细银行流水（需盖银行章）",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Freelancer,
    LowEducation,
    NoTaxRecord,
    NoSocialInsurance,
    NewPassport,
    HighRiskHukou,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Freelancer => "自由职业",
            Self::LowEducation => "低学历",
            Self::NoTaxRecord => "无纳税",
            Self::NoSocialInsurance => "无社保",
            Self::NewPassport => "护照白本申请",
            Self::HighRiskHukou => "高危户籍",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub is_high_risk: bool,
    #[serde(serialize_with = "serialize_factor_labels")]
    pub risk_factors: Vec<RiskFactor>,
    pub additional_materials: Vec<String>,
    pub notes: Vec<String>,
}

fn serialize_factor_labels<S: serde::Serializer>(
    factors: &[RiskFactor],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(factors.iter().map(|factor| factor.label()))
}

/// Screen a raw questionnaire for overstay-risk signals. Never fails.
pub fn assess_risk(form: &Map<String, Value>) -> RiskAssessment {
    let identity = form.get("identityType").and_then(Value::as_str);
    let education = first_truthy(form, &["educationLevel", "education", "education_level"]);
    let tax_payment = first_truthy(form, &["taxPayment", "tax", "tax_payment"]);
    let social_insurance = first_truthy(form, &["socialInsurance", "social_insurance", "insurance"]);
    let passport = first_truthy(form, &["passportStatus", "passport_status", "passport"]);
    let hukou = first_truthy(form, &["hukouType", "hukou_type", "hukou"]);

    let mut assessment = RiskAssessment::default();
    let factors = &mut assessment.risk_factors;

    if identity == Some("FREELANCER") {
        factors.push(RiskFactor::Freelancer);
    }
    if education.is_some_and(|value| is_one_of(value, &LOW_EDUCATION_LEVELS)) {
        factors.push(RiskFactor::LowEducation);
    }
    if tax_payment.map_or(true, |value| is_one_of(value, &["NONE"])) {
        factors.push(RiskFactor::NoTaxRecord);
    }
    if social_insurance.map_or(true, |value| is_one_of(value, &["NONE"])) {
        factors.push(RiskFactor::NoSocialInsurance);
    }
    if passport.is_some_and(|value| is_one_of(value, &["NEW"])) {
        factors.push(RiskFactor::NewPassport);
    }
    if hukou.is_some_and(|value| is_one_of(value, &HIGH_RISK_HUKOU)) {
        factors.push(RiskFactor::HighRiskHukou);
    }

    if !assessment.risk_factors.is_empty() {
        assessment.is_high_risk = true;
        assessment
            .notes
            .push("申请人属于高风险群体，需要通过滞留风险评估方案。".to_string());
        assessment
            .additional_materials
            .extend(HIGH_RISK_MATERIALS.iter().map(|item| item.to_string()));
    }

    let tax_stamped = first_flag(form, &["taxStamped", "tax_stamped", "has_tax_stamp"]);
    if tax_payment.is_some() && tax_stamped {
        assessment
            .notes
            .push("税单有盖章，需要补充社保+营业执照确认居住条件。".to_string());
        assessment
            .additional_materials
            .extend(["社保缴纳证明".to_string(), "营业执照复印件".to_string()]);
    }

    let frequent_job_change = first_flag(
        form,
        &["frequentJobChange", "frequent_job_change", "job_change_frequent"],
    );
    if social_insurance.is_some() && frequent_job_change {
        assessment
            .notes
            .push("过去五年社保缴纳单位变更频繁，需通过滞留风险评估方案。".to_string());
        assessment.is_high_risk = true;
    }

    info!(
        high_risk = assessment.is_high_risk,
        factors = assessment.risk_factors.len(),
        "risk assessment completed"
    );
    assessment
}

/// Reference guide published with the risk screening.
pub fn risk_guide(table: &RequirementTable) -> RiskGuide {
    table.risk_guide()
}

/// First listed field carrying a truthy value.
fn first_truthy<'a>(form: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    let value = fields
        .iter()
        .filter_map(|field| form.get(*field))
        .find(|value| is_truthy(value));
    debug!(?fields, found = value.is_some(), "risk field lookup");
    value
}

/// The first present field decides; bools as-is, else `"true"`, `"True"`, `"1"` or `1`.
fn first_flag(form: &Map<String, Value>, fields: &[&str]) -> bool {
    let Some(value) = fields.iter().find_map(|field| form.get(*field)) else {
        return false;
    };
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => matches!(text.as_str(), "true" | "True" | "1"),
        Value::Number(number) => number.as_i64() == Some(1),
        _ => false,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn is_one_of(value: &Value, candidates: &[&str]) -> bool {
    value
        .as_str()
        .is_some_and(|text| candidates.contains(&text))
}
