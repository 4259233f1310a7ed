//! Single-theme feedback for the person venting.
//!
//! Unlike the boss report this returns exactly one paragraph: the keyword
//! groups are checked in priority order and the first hit wins.

use serde::{Deserialize, Serialize};

/// Which canned paragraph a piece of text maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Workload,
    Micromanagement,
    Unfairness,
    Communication,
    General,
}

impl FeedbackCategory {
    /// Keyword groups in the order they are checked.
    pub const PRIORITY: [FeedbackCategory; 4] = [
        FeedbackCategory::Workload,
        FeedbackCategory::Micromanagement,
        FeedbackCategory::Unfairness,
        FeedbackCategory::Communication,
    ];

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            FeedbackCategory::Workload => &["workload", "too much", "overwhelmed"],
            FeedbackCategory::Micromanagement => &["micromanage", "control", "trust"],
            FeedbackCategory::Unfairness => &["unfair", "bias", "favorite"],
            FeedbackCategory::Communication => &["communication", "unclear", "confusing"],
            FeedbackCategory::General => &[],
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            FeedbackCategory::Workload => "It sounds like you're feeling overwhelmed with your workload. Consider having a conversation about priorities and realistic timelines. Maybe suggest a weekly check-in to align on what's most important.",
            FeedbackCategory::Micromanagement => "Feeling micromanaged can be frustrating. Try demonstrating your reliability through consistent updates and proactive communication. This might help build the trust needed for more autonomy.",
            FeedbackCategory::Unfairness => "Workplace fairness is important for everyone. Consider documenting specific examples and having a calm, professional conversation about your observations. Focus on the impact rather than intentions.",
            FeedbackCategory::Communication => "Clear communication is key to a good working relationship. Try asking specific questions and summarizing what you understand to ensure you're both on the same page.",
            FeedbackCategory::General => "Thank you for sharing. Remember that workplace conflicts are often opportunities for growth and better understanding. Consider approaching this situation with curiosity rather than frustration.",
        }
    }
}

/// Picks the first keyword group contained in `text`, ignoring case.
pub fn categorize(text: &str) -> FeedbackCategory {
    let lower = text.to_lowercase();

    FeedbackCategory::PRIORITY
        .into_iter()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .unwrap_or(FeedbackCategory::General)
}

/// Returns the canned feedback paragraph for `text`. Never fails.
pub fn classify(text: &str) -> &'static str {
    categorize(text).message()
}
