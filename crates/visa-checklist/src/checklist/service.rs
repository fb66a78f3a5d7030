use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::domain::{consulate_display, ApplicantProfile, ApplicationMode};
use super::engine::ChecklistEngine;
use super::intake::{normalize_form, Intake};
use super::render::{RenderError, RenderFormat};
use super::requirements::{RequirementTable, RiskGuide};
use super::risk::{self, RiskAssessment};
use super::sections::DocumentList;

const DOWNLOAD_STEM: &str = "visa-checklist";

/// Service validating questionnaires before handing them to the engine and renderers.
#[derive(Debug, Clone)]
pub struct ChecklistService {
    engine: Arc<ChecklistEngine>,
}

/// Generated checklist plus intake diagnostics, as returned by the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistOutcome {
    #[serde(skip)]
    pub profile: ApplicantProfile,
    pub sections: DocumentList,
    pub notes: Vec<String>,
}

/// Rendered document ready to be served as an attachment.
#[derive(Debug, Clone)]
pub struct RenderedChecklist {
    pub content_type: &'static str,
    pub file_name: String,
    pub body: Vec<u8>,
}

impl ChecklistService {
    pub fn new(table: Arc<RequirementTable>) -> Self {
        Self::with_engine(ChecklistEngine::new(table))
    }

    pub fn with_engine(engine: ChecklistEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &ChecklistEngine {
        &self.engine
    }

    /// Validate and normalize a raw questionnaire.
    pub fn intake(&self, form: &Value) -> Result<Intake, ChecklistServiceError> {
        let form = require_form(form)?;
        let intake = normalize_form(form);

        if let Some(consulate) = intake
            .profile
            .residence_consulate
            .as_ref()
            .filter(|consulate| !consulate.is_supported())
        {
            warn!(%consulate, "rejected questionnaire for unsupported consulate");
            return Err(ChecklistServiceError::UnsupportedConsulate);
        }

        info!(
            residence = consulate_display(intake.profile.residence_consulate.as_ref()),
            hukou = consulate_display(intake.profile.hukou_consulate.as_ref()),
            application = intake.profile.application.label(),
            visa = intake.profile.visa_duration.code(),
            "checklist requested"
        );
        if intake.profile.application == ApplicationMode::Family {
            info!(
                members = intake.profile.family_members.len(),
                "family application"
            );
        }

        Ok(intake)
    }

    pub fn generate(&self, form: &Value) -> Result<ChecklistOutcome, ChecklistServiceError> {
        let Intake { profile, notes } = self.intake(form)?;
        let sections = self.engine.generate(&profile);
        Ok(ChecklistOutcome {
            profile,
            sections,
            notes,
        })
    }

    pub fn render(
        &self,
        form: &Value,
        format: RenderFormat,
        generated_on: NaiveDate,
    ) -> Result<RenderedChecklist, ChecklistServiceError> {
        let outcome = self.generate(form)?;
        let renderer = format.renderer(generated_on);
        let body = renderer.render(&outcome.sections, &outcome.profile)?;

        Ok(RenderedChecklist {
            content_type: renderer.content_type(),
            file_name: format!(
                "{DOWNLOAD_STEM}-{}.{}",
                generated_on.format("%Y%m%d"),
                renderer.file_extension()
            ),
            body,
        })
    }

    pub fn assess_risk(&self, form: &Value) -> Result<RiskAssessment, ChecklistServiceError> {
        let form = require_form(form)?;
        Ok(risk::assess_risk(form))
    }

    pub fn risk_guide(&self) -> RiskGuide {
        risk::risk_guide(self.engine.table())
    }
}

fn require_form(form: &Value) -> Result<&Map<String, Value>, ChecklistServiceError> {
    match form {
        Value::Object(fields) if !fields.is_empty() => Ok(fields),
        _ => {
            warn!("questionnaire body missing or not an object");
            Err(ChecklistServiceError::EmptyForm)
        }
    }
}

/// Error raised by the checklist service.
#[derive(Debug, thiserror::Error)]
pub enum ChecklistServiceError {
    #[error("没有提交表单数据")]
    EmptyForm,
    #[error("目前暂不支持在其他领区申请日本签证，请选择北京或上海领区。")]
    UnsupportedConsulate,
    #[error(transparent)]
    Render(#[from] RenderError),
}
