use serde::{Deserialize, Serialize};

use super::session::BossEmail;
use crate::workflows::report::BossReport;

/// Template parameters handed to the delivery collaborator. The report
/// fields are embedded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossReportNotification {
    pub template: String,
    pub boss_email: BossEmail,
    pub rephrased_vent_statements: String,
    pub suggestions_for_boss: String,
}

impl BossReportNotification {
    pub fn new(template: &str, boss_email: BossEmail, report: BossReport) -> Self {
        let BossReport {
            rephrased_vent_statements,
            suggestions_for_boss,
        } = report;

        Self {
            template: template.to_string(),
            boss_email,
            rephrased_vent_statements,
            suggestions_for_boss,
        }
    }

    pub fn report(&self) -> BossReport {
        BossReport {
            rephrased_vent_statements: self.rephrased_vent_statements.clone(),
            suggestions_for_boss: self.suggestions_for_boss.clone(),
        }
    }
}

/// Outbound hook for finished reports (e-mail relay, queue, log sink).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: BossReportNotification) -> Result<(), NotificationError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
