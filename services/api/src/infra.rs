use boss_vent::workflows::vent::{
    BossReportNotification, NotificationError, NotificationPublisher,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[cfg(test)]
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationPublisher {
    events: Arc<std::sync::Mutex<Vec<BossReportNotification>>>,
}

#[cfg(test)]
impl NotificationPublisher for InMemoryNotificationPublisher {
    fn publish(&self, notification: BossReportNotification) -> Result<(), NotificationError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotificationError::Transport("notification store poisoned".to_string()))?;
        guard.push(notification);
        Ok(())
    }
}

#[cfg(test)]
impl InMemoryNotificationPublisher {
    pub(crate) fn events(&self) -> Vec<BossReportNotification> {
        self.events.lock().expect("notification mutex poisoned").clone()
    }
}

/// Hands reports to the log pipeline instead of a mail relay.
#[derive(Default, Clone, Copy)]
pub(crate) struct LogNotificationPublisher;

impl NotificationPublisher for LogNotificationPublisher {
    fn publish(&self, notification: BossReportNotification) -> Result<(), NotificationError> {
        info!(
            template = %notification.template,
            boss_email = %notification.boss_email,
            rephrased_vent_statements = %notification.rephrased_vent_statements,
            suggestions_for_boss = %notification.suggestions_for_boss,
            "boss report notification"
        );
        Ok(())
    }
}

/// Uses `text` when given, otherwise reads all of stdin.
pub(crate) fn read_text(text: Option<String>) -> Result<String, std::io::Error> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
