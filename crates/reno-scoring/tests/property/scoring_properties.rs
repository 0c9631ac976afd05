use proptest::prelude::*;
use reno_core::constants::*;
use reno_core::models::{SciTier, ScopeConfidenceInput, Step};
use reno_scoring::compute_scope_confidence;

fn arb_step() -> impl Strategy<Value = Step> {
    (1u32..100, any::<bool>(), any::<bool>(), proptest::option::of(0.0f64..100.0)).prop_map(
        |(n, inspection, pays, percent)| Step {
            step_number: n,
            title: format!("Step {n}"),
            requires_inspection: inspection,
            triggers_payment: pays,
            typical_cost_percent: percent,
        },
    )
}

prop_compose! {
    fn arb_input()(
        steps in proptest::collection::vec(arb_step(), 0..40),
        template_step_count in 0u32..50,
        total_inspections in 0u32..20,
        total_gates in 0u32..20,
        flags in proptest::array::uniform5(any::<bool>()),
    ) -> ScopeConfidenceInput {
        ScopeConfidenceInput {
            steps,
            template_step_count,
            total_inspections,
            total_gates,
            has_code_references: flags[0],
            has_holdback: flags[1],
            has_milestones: flags[2],
            has_warranty_terms: flags[3],
            has_bcin: flags[4],
        }
    }
}

// ── Bounded 0.0–1.0 ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_bounded_zero_to_one(input in arb_input()) {
        let result = compute_scope_confidence(&input);
        prop_assert!(
            (0.0..=1.0).contains(&result.score),
            "Out of bounds: {}",
            result.score
        );
    }
}

// ── Tier consistent with score ───────────────────────────────────────────

proptest! {
    #[test]
    fn tier_consistent_with_score(input in arb_input()) {
        let result = compute_scope_confidence(&input);
        let expected = if result.score >= 0.80 {
            SciTier::High
        } else if result.score >= 0.50 {
            SciTier::Medium
        } else {
            SciTier::Low
        };
        prop_assert_eq!(result.tier, expected);
    }
}

// ── Deterministic ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn deterministic(input in arb_input()) {
        let first = compute_scope_confidence(&input);
        let second = compute_scope_confidence(&input);
        prop_assert_eq!(first.score.to_bits(), second.score.to_bits());
        prop_assert_eq!(first, second);
    }
}

// ── Each contribution capped at its weight ───────────────────────────────

proptest! {
    #[test]
    fn contributions_capped_at_weights(input in arb_input()) {
        let b = compute_scope_confidence(&input).breakdown;
        prop_assert!((0.0..=STEP_COVERAGE_WEIGHT).contains(&b.step_coverage));
        prop_assert!((0.0..=INSPECTION_COVERAGE_WEIGHT).contains(&b.inspection_coverage));
        prop_assert!((0.0..=GATE_COVERAGE_WEIGHT).contains(&b.gate_coverage));
        prop_assert!((0.0..=CODE_REFERENCES_WEIGHT).contains(&b.code_references));
        prop_assert!((0.0..=PAYMENT_STRUCTURE_WEIGHT).contains(&b.payment_structure));
        prop_assert!((0.0..=WARRANTY_TERMS_WEIGHT).contains(&b.warranty_terms));
        prop_assert!((0.0..=BCIN_BONUS_WEIGHT).contains(&b.bcin_bonus));
    }
}

// ── Zero-denominator asymmetry ───────────────────────────────────────────

proptest! {
    #[test]
    fn zero_denominators_are_asymmetric(mut input in arb_input()) {
        input.template_step_count = 0;
        input.total_inspections = 0;
        let b = compute_scope_confidence(&input).breakdown;
        prop_assert_eq!(b.step_coverage, 0.0);
        prop_assert_eq!(b.inspection_coverage, 0.20);
    }
}
