use reno_core::constants::{
    DEPOSIT_DUE, DEPOSIT_FRACTION, DEPOSIT_LABEL, DEPOSIT_PERCENT, FINAL_PAYMENT_DUE,
    FINAL_PAYMENT_LABEL, FULL_ALLOCATION_PERCENT,
};
use reno_core::models::{PaymentMilestone, Step};

/// Derive the ordered payment milestones for a step sequence.
///
/// 1. Deposit: 10% on signing, always first, even with no steps.
/// 2. One milestone per step that triggers payment with a non-zero cost
///    percent, in input order.
/// 3. Final payment for `100 - used` when the running total is below 100.
///
/// `estimated_cost` is not validated: zero yields zero amounts and a
/// negative cost yields negative amounts.
pub fn derive_payment_milestones(steps: &[Step], estimated_cost: f64) -> Vec<PaymentMilestone> {
    let mut milestones = Vec::with_capacity(steps.len() + 2);

    milestones.push(PaymentMilestone::new(
        DEPOSIT_LABEL,
        round_amount(estimated_cost * DEPOSIT_FRACTION),
        DEPOSIT_PERCENT,
        DEPOSIT_DUE,
    ));
    let mut used_percent = DEPOSIT_PERCENT;

    for step in steps {
        let Some(percent) = step.payment_percent() else {
            continue;
        };
        milestones.push(PaymentMilestone::new(
            step.title.clone(),
            amount_for(estimated_cost, percent),
            percent,
            format!("Step {} complete", step.step_number),
        ));
        used_percent += percent;
    }

    if used_percent < FULL_ALLOCATION_PERCENT {
        let remaining = FULL_ALLOCATION_PERCENT - used_percent;
        milestones.push(PaymentMilestone::new(
            FINAL_PAYMENT_LABEL,
            amount_for(estimated_cost, remaining),
            remaining,
            FINAL_PAYMENT_DUE,
        ));
    }

    milestones
}

/// `round(cost × percent / 100)`.
pub fn amount_for(estimated_cost: f64, percent: f64) -> i64 {
    round_amount(estimated_cost * percent / 100.0)
}

/// Round half away from zero to whole currency units.
fn round_amount(value: f64) -> i64 {
    value.round() as i64
}
