use crate::models::{PaymentMilestone, Step};

/// Derives a payment schedule from a step sequence and an estimated cost.
pub trait IMilestoneAllocator: Send + Sync {
    /// Deposit first, step milestones in step order, final payment last.
    fn allocate(&self, steps: &[Step], estimated_cost: f64) -> Vec<PaymentMilestone>;
}
