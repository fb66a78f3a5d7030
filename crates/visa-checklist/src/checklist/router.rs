use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use super::render::RenderFormat;
use super::service::{ChecklistService, ChecklistServiceError};

/// Router builder exposing checklist generation, download and risk screening.
pub fn checklist_router(service: Arc<ChecklistService>) -> Router {
    Router::new()
        .route("/api/v1/checklist", post(generate_handler))
        .route("/api/v1/checklist/download", post(download_handler))
        .route("/api/v1/risk-assessment", post(risk_handler))
        .route("/api/v1/risk-assessment/guide", get(risk_guide_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DownloadQuery {
    pub(crate) format: Option<String>,
}

pub(crate) async fn generate_handler(
    State(service): State<Arc<ChecklistService>>,
    Json(form): Json<Value>,
) -> Response {
    match service.generate(&form) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn download_handler(
    State(service): State<Arc<ChecklistService>>,
    Query(query): Query<DownloadQuery>,
    Json(form): Json<Value>,
) -> Response {
    let format = match query.format.as_deref() {
        None => RenderFormat::default(),
        Some(raw) => match RenderFormat::parse(raw) {
            Some(format) => format,
            None => {
                let payload = json!({
                    "error": format!("unsupported download format: {raw}"),
                });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
    };

    match service.render(&form, format, Local::now().date_naive()) {
        Ok(document) => {
            let disposition = format!("attachment; filename=\"{}\"", document.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                document.body,
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn risk_handler(
    State(service): State<Arc<ChecklistService>>,
    Json(form): Json<Value>,
) -> Response {
    match service.assess_risk(&form) {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn risk_guide_handler(State(service): State<Arc<ChecklistService>>) -> Response {
    (StatusCode::OK, Json(service.risk_guide())).into_response()
}

fn error_response(err: ChecklistServiceError) -> Response {
    let status = match &err {
        ChecklistServiceError::EmptyForm | ChecklistServiceError::UnsupportedConsulate => {
            StatusCode::BAD_REQUEST
        }
        ChecklistServiceError::Render(inner) => {
            error!(error = %inner, "checklist rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": err.to_string(),
    });
    (status, Json(payload)).into_response()
}
