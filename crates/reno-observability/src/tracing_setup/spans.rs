//! Span definitions per operation: scoring, milestone derivation, report.

/// Create a scope-confidence scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($proposal_id:expr) => {
        tracing::info_span!("reno.scoring", proposal_id = %$proposal_id)
    };
}

/// Create a milestone derivation span.
#[macro_export]
macro_rules! milestones_span {
    ($proposal_id:expr, $estimated_cost:expr) => {
        tracing::info_span!(
            "reno.milestones",
            proposal_id = %$proposal_id,
            estimated_cost = $estimated_cost
        )
    };
}

/// Create a report assembly span.
#[macro_export]
macro_rules! report_span {
    ($proposal_id:expr, $category:expr) => {
        tracing::info_span!("reno.report", proposal_id = %$proposal_id, category = %$category)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "reno.scoring";
    pub const MILESTONES: &str = "reno.milestones";
    pub const REPORT: &str = "reno.report";
}
