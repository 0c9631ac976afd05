use reno_core::models::{MilestoneSchedule, PaymentMilestone, Step};
use reno_core::traits::IMilestoneAllocator;

use crate::{derive, schedule};

/// Payment-milestone allocator.
///
/// Stateless; share one instance freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilestoneAllocator;

impl MilestoneAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Allocate and summarize. Warns when the schedule exceeds 100%.
    pub fn schedule(&self, steps: &[Step], estimated_cost: f64) -> MilestoneSchedule {
        let summary = schedule::summarize(self.allocate(steps, estimated_cost), estimated_cost);
        if summary.overshoot_percent > 0.0 {
            tracing::warn!(
                total_percent = summary.total_percent,
                overshoot_percent = summary.overshoot_percent,
                "payment schedule allocates more than 100% of the estimated cost"
            );
        }
        summary
    }
}

impl IMilestoneAllocator for MilestoneAllocator {
    fn allocate(&self, steps: &[Step], estimated_cost: f64) -> Vec<PaymentMilestone> {
        let milestones = derive::derive_payment_milestones(steps, estimated_cost);
        tracing::debug!(
            steps = steps.len(),
            milestones = milestones.len(),
            estimated_cost,
            "payment milestones derived"
        );
        milestones
    }
}
