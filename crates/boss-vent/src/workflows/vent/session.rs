use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::notification::BossReportNotification;
use crate::workflows::report::{BossReportGenerator, VentAnalysis};

/// Validated address of the manager receiving the anonymous report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BossEmail(String);

impl BossEmail {
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        let candidate = raw.trim();
        let mut parts = candidate.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();

        let valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !candidate.chars().any(char::is_whitespace);

        if valid {
            Ok(Self(candidate.to_string()))
        } else {
            Err(SessionError::InvalidEmail(candidate.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BossEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BossEmail {
    type Error = SessionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BossEmail> for String {
    fn from(value: BossEmail) -> Self {
        value.0
    }
}

/// Where a session sits in the setup → venting cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentStage {
    Setup,
    Venting,
}

/// Accumulates final transcript segments between "start" and "stop".
#[derive(Debug, Clone)]
pub struct VentSession {
    stage: VentStage,
    boss_email: Option<BossEmail>,
    transcript: String,
    started_at: Option<DateTime<Utc>>,
}

impl Default for VentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl VentSession {
    pub fn new() -> Self {
        Self {
            stage: VentStage::Setup,
            boss_email: None,
            transcript: String::new(),
            started_at: None,
        }
    }

    pub fn stage(&self) -> VentStage {
        self.stage
    }

    pub fn boss_email(&self) -> Option<&BossEmail> {
        self.boss_email.as_ref()
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn set_boss_email(&mut self, raw: &str) -> Result<(), SessionError> {
        self.boss_email = Some(BossEmail::parse(raw)?);
        Ok(())
    }

    pub fn start(&mut self, at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.stage == VentStage::Venting {
            return Err(SessionError::AlreadyVenting);
        }
        if self.boss_email.is_none() {
            return Err(SessionError::MissingRecipient);
        }

        self.stage = VentStage::Venting;
        self.started_at = Some(at);
        Ok(())
    }

    /// Appends a finalized speech segment. Blank segments are dropped.
    pub fn append_final_segment(&mut self, segment: &str) -> Result<(), SessionError> {
        if self.stage != VentStage::Venting {
            return Err(SessionError::NotVenting);
        }

        let segment = segment.trim();
        if segment.is_empty() {
            return Ok(());
        }

        let joined = format!("{} {}", self.transcript.trim(), segment);
        self.transcript = joined.trim().to_string();
        Ok(())
    }

    /// Ends the vent, builds the notification, and resets the session.
    pub fn stop(
        &mut self,
        generator: &BossReportGenerator,
        template: &str,
        at: DateTime<Utc>,
    ) -> Result<CompletedVent, SessionError> {
        if self.stage != VentStage::Venting {
            return Err(SessionError::NotVenting);
        }
        let boss_email = self
            .boss_email
            .clone()
            .ok_or(SessionError::MissingRecipient)?;
        let started_at = self.started_at.unwrap_or(at);

        let (report, analysis) = generator.generate_with_analysis(&self.transcript);
        let notification = BossReportNotification::new(template, boss_email, report);

        *self = Self::new();

        Ok(CompletedVent {
            notification,
            analysis,
            started_at,
            stopped_at: at,
        })
    }
}

/// Output of a finished session, ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedVent {
    pub notification: BossReportNotification,
    pub analysis: VentAnalysis,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
}

impl CompletedVent {
    pub fn duration_secs(&self) -> i64 {
        (self.stopped_at - self.started_at).num_seconds().max(0)
    }
}

/// Rejected session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("a boss email is required before venting")]
    MissingRecipient,
    #[error("session is already recording")]
    AlreadyVenting,
    #[error("session is not recording")]
    NotVenting,
}
