use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::notification::{NotificationError, NotificationPublisher};
use super::session::{CompletedVent, SessionError, VentSession};
use crate::workflows::feedback::{categorize, FeedbackCategory};
use crate::workflows::report::{BossReport, BossReportGenerator, VentAnalysis};

/// A complete vent captured elsewhere: recipient plus finalized segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VentSubmission {
    pub boss_email: String,
    #[serde(default)]
    pub segments: Vec<String>,
}

/// Service composing the report generator with an outbound publisher.
pub struct VentService<P> {
    generator: BossReportGenerator,
    publisher: Arc<P>,
    template: String,
}

impl<P> VentService<P>
where
    P: NotificationPublisher + 'static,
{
    pub fn new(publisher: Arc<P>, template: impl Into<String>) -> Self {
        Self::with_generator(BossReportGenerator::standard(), publisher, template)
    }

    pub fn with_generator(
        generator: BossReportGenerator,
        publisher: Arc<P>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            publisher,
            template: template.into(),
        }
    }

    pub fn generator(&self) -> &BossReportGenerator {
        &self.generator
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Single-paragraph feedback for the person venting.
    pub fn feedback(&self, text: &str) -> FeedbackCategory {
        categorize(text)
    }

    /// Boss report plus the detection that produced it.
    pub fn report(&self, text: &str) -> (BossReport, VentAnalysis) {
        let (report, analysis) = self.generator.generate_with_analysis(text);
        debug!(
            themes = ?analysis.theme_labels(),
            emotional_intensity = analysis.emotional_intensity,
            "boss report generated"
        );
        (report, analysis)
    }

    /// Runs a whole session for the submission and publishes the result.
    pub fn submit(&self, submission: VentSubmission) -> Result<CompletedVent, VentServiceError> {
        let VentSubmission {
            boss_email,
            segments,
        } = submission;

        let mut session = VentSession::new();
        session.set_boss_email(&boss_email)?;
        session.start(Utc::now())?;
        for segment in &segments {
            session.append_final_segment(segment)?;
        }

        let completed = session.stop(&self.generator, &self.template, Utc::now())?;
        self.deliver(&completed)?;
        Ok(completed)
    }

    /// Publishes an already completed session.
    pub fn deliver(&self, completed: &CompletedVent) -> Result<(), VentServiceError> {
        match self.publisher.publish(completed.notification.clone()) {
            Ok(()) => {
                info!(
                    template = %completed.notification.template,
                    themes = ?completed.analysis.theme_labels(),
                    emotional_intensity = completed.analysis.emotional_intensity,
                    duration_secs = completed.duration_secs(),
                    "anonymous boss report sent"
                );
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to send anonymous boss report");
                Err(err.into())
            }
        }
    }
}

/// Error raised by the vent service.
#[derive(Debug, thiserror::Error)]
pub enum VentServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
