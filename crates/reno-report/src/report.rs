use serde::{Deserialize, Serialize};
use ts_rs::TS;

use reno_core::models::{MilestoneSchedule, SciResult};

/// Scoring and payment data for one proposal, ready to render.
///
/// Built by [`ReportBuilder`](crate::ReportBuilder), which supplies the
/// configured currency and the category template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProposalReport {
    pub proposal_id: String,
    pub title: String,
    pub job_category: String,
    pub currency: String,
    pub estimated_cost: f64,
    pub sci: SciResult,
    pub schedule: MilestoneSchedule,
}
