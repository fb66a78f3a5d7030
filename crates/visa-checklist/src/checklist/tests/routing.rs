use super::common::*;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::checklist::router::{generate_handler, risk_guide_handler, DownloadQuery};

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn questionnaire() -> Value {
    json!({
        "applicantName": "张三",
        "residenceConsulate": "beijing",
        "hukouConsulate": "shanghai",
        "applicationType": "INDIVIDUAL",
        "processType": "NORMAL",
        "identityType": "EMPLOYED",
        "visaType": "THREE"
    })
}

#[tokio::test]
async fn generate_handler_returns_ordered_sections() {
    let response = generate_handler(State(service()), axum::Json(questionnaire())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let keys: Vec<&str> = body["sections"]
        .as_array()
        .expect("sections array")
        .iter()
        .filter_map(|section| section["key"].as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            "basic_info",
            "basic_materials",
            "employment_proof",
            "financial_proof",
            "residence_proof",
            "other_materials",
        ]
    );
    assert_eq!(body["sections"][0]["title"], "基本信息");
    assert_eq!(body["notes"], json!([]));
}

#[tokio::test]
async fn generate_handler_rejects_empty_form() {
    let response = generate_handler(State(service()), axum::Json(json!({}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "没有提交表单数据");
}

#[tokio::test]
async fn generate_route_rejects_unsupported_consulate() {
    let mut form = questionnaire();
    form["residenceConsulate"] = json!("OTHER");

    let response = router()
        .oneshot(post_json("/api/v1/checklist", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("目前暂不支持")));
}

#[tokio::test]
async fn generate_route_rejects_non_object_body() {
    let response = router()
        .oneshot(post_json("/api/v1/checklist", &json!(["beijing"])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_route_defaults_to_html_attachment() {
    let response = router()
        .oneshot(post_json("/api/v1/checklist/download", &questionnaire()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"visa-checklist-"));
    assert!(disposition.ends_with(".html\""));

    let body = String::from_utf8(read_body(response).await).unwrap();
    assert!(body.contains("<h2>工作证明</h2>"));
}

#[tokio::test]
async fn download_route_renders_text_on_request() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/checklist/download?format=txt",
            &questionnaire(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let body = String::from_utf8(read_body(response).await).unwrap();
    assert!(body.contains("申请人: 张三"));
}

#[tokio::test]
async fn download_handler_rejects_unknown_format() {
    let query = DownloadQuery {
        format: Some("pdf".to_string()),
    };

    let response = crate::checklist::router::download_handler(
        State(service()),
        Query(query),
        axum::Json(questionnaire()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "unsupported download format: pdf");
}

#[tokio::test]
async fn risk_route_reports_factors() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/risk-assessment",
            &json!({ "identityType": "FREELANCER", "passportStatus": "NEW" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["is_high_risk"], json!(true));
    assert_eq!(
        body["risk_factors"],
        json!(["自由职业", "无纳税", "无社保", "护照白本申请"])
    );
}

#[tokio::test]
async fn risk_route_rejects_empty_form() {
    let response = router()
        .oneshot(post_json("/api/v1/risk-assessment", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn guide_handler_serves_table_guide() {
    let response = risk_guide_handler(State(service())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["highRiskGroups"].as_array().map(Vec::len),
        Some(table().risk_guide().high_risk_groups.len())
    );
}

#[tokio::test]
async fn guide_route_is_a_get() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/risk-assessment/guide")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
