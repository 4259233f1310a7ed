use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::notification::NotificationPublisher;
use super::service::{VentService, VentServiceError, VentSubmission};
use crate::workflows::feedback::FeedbackCategory;
use crate::workflows::report::VentAnalysis;

/// Free-form transcript posted to the feedback and report endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub category: FeedbackCategory,
    pub feedback: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub rephrased_vent_statements: String,
    pub suggestions_for_boss: String,
    pub analysis: VentAnalysis,
}

/// Router builder exposing the feedback, report, and vent delivery endpoints.
pub fn vent_router<P>(service: Arc<VentService<P>>) -> Router
where
    P: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/feedback", post(feedback_handler::<P>))
        .route("/api/v1/reports", post(report_handler::<P>))
        .route("/api/v1/vents", post(vent_handler::<P>))
        .with_state(service)
}

pub(crate) async fn feedback_handler<P>(
    State(service): State<Arc<VentService<P>>>,
    Json(request): Json<TranscriptRequest>,
) -> Json<FeedbackResponse>
where
    P: NotificationPublisher + 'static,
{
    let category = service.feedback(&request.text);
    Json(FeedbackResponse {
        category,
        feedback: category.message(),
    })
}

pub(crate) async fn report_handler<P>(
    State(service): State<Arc<VentService<P>>>,
    Json(request): Json<TranscriptRequest>,
) -> Json<ReportResponse>
where
    P: NotificationPublisher + 'static,
{
    let (report, analysis) = service.report(&request.text);
    Json(ReportResponse {
        rephrased_vent_statements: report.rephrased_vent_statements,
        suggestions_for_boss: report.suggestions_for_boss,
        analysis,
    })
}

pub(crate) async fn vent_handler<P>(
    State(service): State<Arc<VentService<P>>>,
    Json(submission): Json<VentSubmission>,
) -> Response
where
    P: NotificationPublisher + 'static,
{
    match service.submit(submission) {
        Ok(completed) => (StatusCode::ACCEPTED, Json(completed)).into_response(),
        Err(VentServiceError::Session(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(VentServiceError::Notification(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
