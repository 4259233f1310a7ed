pub mod feedback;
pub mod report;
pub mod vent;

pub use feedback::{categorize, classify, FeedbackCategory};
pub use report::{generate, BossReport, BossReportGenerator, ThemeKind, VentAnalysis};
