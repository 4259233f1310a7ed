use boss_vent::workflows::feedback::{categorize, classify, FeedbackCategory};

const WORKLOAD_FEEDBACK: &str = "It sounds like you're feeling overwhelmed with your workload. Consider having a conversation about priorities and realistic timelines. Maybe suggest a weekly check-in to align on what's most important.";
const DEFAULT_FEEDBACK: &str = "Thank you for sharing. Remember that workplace conflicts are often opportunities for growth and better understanding. Consider approaching this situation with curiosity rather than frustration.";

#[test]
fn returns_workload_paragraph() {
    assert_eq!(classify("My workload is too much"), WORKLOAD_FEEDBACK);
    assert_eq!(classify("my WORKLOAD is high"), WORKLOAD_FEEDBACK);
}

#[test]
fn returns_default_paragraph_for_unmatched_text() {
    assert_eq!(classify("I am just having a bad day"), DEFAULT_FEEDBACK);
    assert_eq!(classify(""), DEFAULT_FEEDBACK);
}

#[test]
fn priority_order_is_first_match_wins() {
    assert_eq!(
        classify("my workload feels out of control"),
        WORKLOAD_FEEDBACK
    );
    assert_eq!(
        categorize("I don't trust how unclear the plan is"),
        FeedbackCategory::Micromanagement
    );
    assert_eq!(
        categorize("Their favorite topic is confusing everyone"),
        FeedbackCategory::Unfairness
    );
    assert_eq!(
        categorize("CONFUSING instructions again"),
        FeedbackCategory::Communication
    );
}

#[test]
fn every_category_has_distinct_paragraph() {
    let mut messages: Vec<&str> = FeedbackCategory::PRIORITY
        .iter()
        .map(|category| category.message())
        .collect();
    messages.push(FeedbackCategory::General.message());
    messages.sort_unstable();
    messages.dedup();
    assert_eq!(messages.len(), 5);
}
