use proptest::prelude::*;
use reno_core::models::Step;
use reno_milestones::{derive_payment_milestones, derive_schedule};

fn arb_step() -> impl Strategy<Value = Step> {
    (
        1u32..200,
        any::<bool>(),
        proptest::option::of(prop_oneof![Just(0u32), 1u32..=40].prop_map(f64::from)),
    )
        .prop_map(|(n, pays, percent)| Step {
            step_number: n,
            title: format!("Step {n}"),
            requires_inspection: false,
            triggers_payment: pays,
            typical_cost_percent: percent,
        })
}

// ── Deposit always first ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn deposit_always_first(
        steps in proptest::collection::vec(arb_step(), 0..30),
        cost in -1.0e6f64..1.0e7,
    ) {
        let milestones = derive_payment_milestones(&steps, cost);
        prop_assert!(!milestones.is_empty());
        prop_assert_eq!(milestones[0].label.as_str(), "Deposit");
        prop_assert_eq!(milestones[0].percent, 10.0);
        prop_assert_eq!(milestones[0].due_at.as_str(), "On signing");
    }
}

// ── Percent accounting ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn percent_sums_to_hundred_unless_overshoot(
        steps in proptest::collection::vec(arb_step(), 0..30),
        cost in 0.0f64..1.0e7,
    ) {
        let used: f64 = 10.0 + steps.iter().filter_map(Step::payment_percent).sum::<f64>();
        let schedule = derive_schedule(&steps, cost);

        if used < 100.0 {
            prop_assert!(schedule.final_payment_appended);
            prop_assert_eq!(schedule.total_percent, 100.0);
        } else {
            prop_assert!(!schedule.final_payment_appended);
            prop_assert_eq!(schedule.total_percent, used);
        }
    }
}

// ── One milestone per qualifying step, in order ──────────────────────────

proptest! {
    #[test]
    fn step_milestones_match_qualifying_steps(
        steps in proptest::collection::vec(arb_step(), 0..30),
    ) {
        let milestones = derive_payment_milestones(&steps, 10_000.0);
        let qualifying: Vec<String> = steps
            .iter()
            .filter(|s| s.payment_percent().is_some())
            .map(|s| format!("Step {} complete", s.step_number))
            .collect();
        let derived: Vec<String> = milestones
            .iter()
            .filter(|m| m.due_at.starts_with("Step "))
            .map(|m| m.due_at.clone())
            .collect();
        prop_assert_eq!(derived, qualifying);
    }
}

// ── Deterministic ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn deterministic(
        steps in proptest::collection::vec(arb_step(), 0..30),
        cost in 0.0f64..1.0e7,
    ) {
        prop_assert_eq!(
            derive_payment_milestones(&steps, cost),
            derive_payment_milestones(&steps, cost)
        );
    }
}
