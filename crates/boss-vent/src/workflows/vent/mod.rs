//! Vent capture, delivery, and HTTP surface around the boss report generator.

pub mod notification;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use notification::{BossReportNotification, NotificationError, NotificationPublisher};
pub use router::vent_router;
pub use service::{VentService, VentServiceError, VentSubmission};
pub use session::{BossEmail, CompletedVent, SessionError, VentSession, VentStage};
