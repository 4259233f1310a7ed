use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::vent::notification::{
    BossReportNotification, NotificationError, NotificationPublisher,
};
use crate::workflows::vent::{vent_router, VentService, VentSession, VentSubmission};

pub(super) const TEMPLATE: &str = "boss_report";
pub(super) const BOSS_EMAIL: &str = "boss@example.com";

pub(super) fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 6, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn session_stop() -> DateTime<Utc> {
    session_start() + Duration::seconds(95)
}

pub(super) fn venting_session() -> VentSession {
    let mut session = VentSession::new();
    session
        .set_boss_email(BOSS_EMAIL)
        .expect("valid boss email");
    session.start(session_start()).expect("session starts");
    session
}

pub(super) fn submission(segments: &[&str]) -> VentSubmission {
    VentSubmission {
        boss_email: BOSS_EMAIL.to_string(),
        segments: segments.iter().map(|segment| segment.to_string()).collect(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<BossReportNotification>>>,
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: BossReportNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<BossReportNotification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

pub(super) struct UnavailableNotifications;

impl NotificationPublisher for UnavailableNotifications {
    fn publish(&self, _notification: BossReportNotification) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("mail relay offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<VentService<MemoryNotifications>>, MemoryNotifications) {
    let notifications = MemoryNotifications::default();
    let service = Arc::new(VentService::new(
        Arc::new(notifications.clone()),
        TEMPLATE,
    ));
    (service, notifications)
}

pub(super) fn vent_router_with_service(
    service: Arc<VentService<MemoryNotifications>>,
) -> axum::Router {
    vent_router(service)
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
