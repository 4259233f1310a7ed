use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::feedback::FeedbackCategory;
use crate::workflows::report::{DEFAULT_MESSAGES, EMOTIONAL_INTENSITY_NOTE};
use crate::workflows::vent::router::{vent_handler, TranscriptRequest};
use crate::workflows::vent::VentService;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&body).expect("request serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn feedback_route_returns_single_paragraph() {
    let (service, _) = build_service();
    let router = vent_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/feedback",
            json!({ "text": "I feel my boss tries to control everything" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["category"], "micromanagement");
    assert_eq!(
        body["feedback"],
        FeedbackCategory::Micromanagement.message()
    );
}

#[tokio::test]
async fn report_route_includes_analysis() {
    let (service, notifications) = build_service();
    let router = vent_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/reports",
            json!({ "text": "This is FUCKING ridiculous." }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body["rephrased_vent_statements"],
        format!("{EMOTIONAL_INTENSITY_NOTE}\n\n{}", DEFAULT_MESSAGES.rephrased)
    );
    assert_eq!(body["suggestions_for_boss"], DEFAULT_MESSAGES.suggestion);
    assert_eq!(body["analysis"]["emotional_intensity"], true);
    assert_eq!(body["analysis"]["themes"], json!([]));
    assert!(notifications.events().is_empty());
}

#[tokio::test]
async fn report_route_treats_missing_text_as_empty() {
    let (service, _) = build_service();
    let router = vent_router_with_service(service);

    let response = router
        .oneshot(post_json("/api/v1/reports", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["rephrased_vent_statements"], DEFAULT_MESSAGES.rephrased);
}

#[tokio::test]
async fn vent_route_accepts_and_publishes() {
    let (service, notifications) = build_service();
    let router = vent_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/vents",
            json!({
                "boss_email": "boss@example.com",
                "segments": ["The instructions were so vague", "and I get no feedback."],
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = json_body(response).await;
    assert_eq!(body["notification"]["boss_email"], BOSS_EMAIL);
    assert_eq!(body["notification"]["template"], TEMPLATE);
    assert_eq!(body["analysis"]["themes"], json!(["communication"]));

    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        body["notification"]["suggestions_for_boss"],
        events[0].suggestions_for_boss
    );
}

#[tokio::test]
async fn vent_route_rejects_missing_email() {
    let (service, notifications) = build_service();
    let router = vent_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/vents",
            json!({ "boss_email": "", "segments": ["my workload is too much"] }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("not a valid email"));
    assert!(notifications.events().is_empty());
}

#[tokio::test]
async fn vent_handler_returns_bad_gateway_when_transport_fails() {
    let service = Arc::new(VentService::new(
        Arc::new(UnavailableNotifications),
        TEMPLATE,
    ));

    let response = vent_handler::<UnavailableNotifications>(
        State(service),
        Json(submission(&["my workload is too much"])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn transcript_request_defaults_to_empty_text() {
    let request: TranscriptRequest = serde_json::from_value(json!({})).expect("deserializes");
    assert!(request.text.is_empty());
}
