use reno_core::constants::{FINAL_PAYMENT_DUE, FULL_ALLOCATION_PERCENT};
use reno_core::models::{MilestoneSchedule, PaymentMilestone, Step};

use crate::derive::derive_payment_milestones;

/// Derive milestones and summarize them in one call.
pub fn derive_schedule(steps: &[Step], estimated_cost: f64) -> MilestoneSchedule {
    summarize(derive_payment_milestones(steps, estimated_cost), estimated_cost)
}

/// Attach totals to a derived milestone list.
///
/// `rounding_delta` is `total_amount - round(estimated_cost)`; it is non-zero
/// when independent rounding drifts or when the schedule overshoots 100%.
pub fn summarize(milestones: Vec<PaymentMilestone>, estimated_cost: f64) -> MilestoneSchedule {
    let total_percent: f64 = milestones.iter().map(|m| m.percent).sum();
    let total_amount: i64 = milestones.iter().map(|m| m.amount).sum();
    let final_payment_appended = milestones
        .last()
        .is_some_and(|m| m.due_at == FINAL_PAYMENT_DUE);

    MilestoneSchedule {
        total_percent,
        total_amount,
        final_payment_appended,
        overshoot_percent: (total_percent - FULL_ALLOCATION_PERCENT).max(0.0),
        rounding_delta: total_amount - estimated_cost.round() as i64,
        milestones,
    }
}
