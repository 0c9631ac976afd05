use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One payment release in a proposal's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentMilestone {
    pub label: String,
    /// Whole currency units, rounded independently per milestone.
    #[ts(type = "number")]
    pub amount: i64,
    /// Nominal percent of the estimated cost.
    pub percent: f64,
    /// Human-readable trigger, e.g. "Step 3 complete".
    pub due_at: String,
}

impl PaymentMilestone {
    pub fn new(
        label: impl Into<String>,
        amount: i64,
        percent: f64,
        due_at: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
            percent,
            due_at: due_at.into(),
        }
    }
}

/// A derived milestone list plus descriptive totals.
///
/// Totals describe the schedule as derived; nothing here corrects an
/// overshoot or a rounding drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MilestoneSchedule {
    pub milestones: Vec<PaymentMilestone>,
    pub total_percent: f64,
    #[ts(type = "number")]
    pub total_amount: i64,
    /// A synthetic "Final Payment" entry closes the schedule.
    pub final_payment_appended: bool,
    /// Percent allocated beyond 100 (0.0 when within budget).
    pub overshoot_percent: f64,
    /// `total_amount - round(estimated_cost)`.
    #[ts(type = "number")]
    pub rounding_delta: i64,
}
