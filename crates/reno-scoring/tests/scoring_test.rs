use reno_core::models::*;
use reno_core::traits::IScopeScorer;
use reno_scoring::{compute_scope_confidence, factors, ScopeConfidenceEngine};

fn steps(count: u32, inspected: u32) -> Vec<Step> {
    (1..=count)
        .map(|n| {
            let step = Step::new(n, format!("Step {n}"));
            if n <= inspected {
                step.with_inspection()
            } else {
                step
            }
        })
        .collect()
}

fn all_flags(steps: Vec<Step>, template: u32, inspections: u32, gates: u32) -> ScopeConfidenceInput {
    ScopeConfidenceInput {
        steps,
        template_step_count: template,
        total_inspections: inspections,
        total_gates: gates,
        has_code_references: true,
        has_holdback: true,
        has_milestones: true,
        has_warranty_terms: true,
        has_bcin: true,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Worked examples ──────────────────────────────────────────────────────

#[test]
fn complete_proposal_with_bonus_clamps_to_one() {
    let input = all_flags(steps(5, 5), 5, 5, 5);
    let result = compute_scope_confidence(&input);

    assert_eq!(result.score, 1.0);
    assert_eq!(result.tier, SciTier::High);
    assert!(approx(result.breakdown.step_coverage, 0.40));
    assert!(approx(result.breakdown.inspection_coverage, 0.20));
    assert!(approx(result.breakdown.gate_coverage, 0.15));
    assert!(approx(result.breakdown.code_references, 0.10));
    assert!(approx(result.breakdown.payment_structure, 0.10));
    assert!(approx(result.breakdown.warranty_terms, 0.05));
    assert!(approx(result.breakdown.bcin_bonus, 0.05));
}

#[test]
fn empty_proposal_with_no_expected_inspections_scores_low() {
    let input = ScopeConfidenceInput {
        template_step_count: 10,
        ..Default::default()
    };
    let result = compute_scope_confidence(&input);

    assert!(approx(result.score, 0.20));
    assert_eq!(result.tier, SciTier::Low);
    assert_eq!(result.breakdown.step_coverage, 0.0);
    assert_eq!(result.breakdown.inspection_coverage, 0.20);
    assert_eq!(result.breakdown.gate_coverage, 0.0);
}

// ── Clamp does not redistribute ─────────────────────────────────────────

#[test]
fn breakdown_keeps_excess_when_score_is_clamped() {
    let input = all_flags(steps(5, 5), 5, 5, 5);
    let result = compute_scope_confidence(&input);

    assert!(approx(result.breakdown.raw_total(), 1.05));
    assert!(result.breakdown.raw_total() > result.score);
    assert!(approx(result.clamped_excess(), 0.05));
}

#[test]
fn breakdown_sums_to_score_when_not_clamped() {
    let mut input = all_flags(steps(4, 1), 8, 2, 2);
    input.has_bcin = false;
    let result = compute_scope_confidence(&input);

    assert!(result.breakdown.raw_total() <= 1.0);
    assert!(approx(result.score, result.breakdown.raw_total()));
    assert!(approx(result.clamped_excess(), 0.0));
}

// ── Tier thresholds reached through the formula ─────────────────────────

#[test]
fn weights_summing_to_one_half_score_medium() {
    // 0.20 inspections (none expected) + 0.15 gates + 0.10 code refs + 0.05 holdback.
    let input = ScopeConfidenceInput {
        template_step_count: 10,
        total_gates: 2,
        has_code_references: true,
        has_holdback: true,
        ..Default::default()
    };
    let result = compute_scope_confidence(&input);

    assert_eq!(result.score, 0.50);
    assert_eq!(result.tier, SciTier::Medium);
}

#[test]
fn every_flag_combination_reaching_one_half_scores_medium() {
    // Inspections and gates give 0.35; each pair of flags adds the last 0.15.
    let flag_sets = [
        (true, true, false, false),
        (true, false, true, false),
        (true, false, false, true),
    ];
    for (code, holdback, milestones, warranty) in flag_sets {
        let input = ScopeConfidenceInput {
            total_gates: 1,
            has_code_references: code,
            has_holdback: holdback,
            has_milestones: milestones,
            has_warranty_terms: warranty,
            ..Default::default()
        };
        let result = compute_scope_confidence(&input);
        assert_eq!(result.score, 0.50, "flags {code} {holdback} {milestones} {warranty}");
        assert_eq!(result.tier, SciTier::Medium);
    }
}

#[test]
fn weights_summing_to_four_fifths_score_high() {
    // 3 of 8 template steps = 0.15, plus 0.20 + 0.15 + 0.10 + 0.10 + 0.05 + 0.05.
    let input = all_flags(steps(3, 0), 8, 0, 3);
    let result = compute_scope_confidence(&input);

    assert_eq!(result.score, 0.80);
    assert_eq!(result.tier, SciTier::High);
}

// ── Zero-denominator policies ───────────────────────────────────────────

#[test]
fn zero_template_gives_no_step_coverage() {
    let mut input = all_flags(steps(7, 0), 0, 3, 2);
    input.has_bcin = false;
    assert_eq!(factors::step_coverage::calculate(&input), 0.0);
    assert_eq!(compute_scope_confidence(&input).breakdown.step_coverage, 0.0);
}

#[test]
fn zero_expected_inspections_gives_full_inspection_coverage() {
    for inspected in [0, 3] {
        let input = all_flags(steps(3, inspected), 3, 0, 0);
        assert_eq!(factors::inspection_coverage::calculate(&input), 0.20);
    }
    let empty = ScopeConfidenceInput::default();
    assert_eq!(factors::inspection_coverage::calculate(&empty), 0.20);
}

#[test]
fn zero_gates_gives_no_gate_coverage() {
    let input = all_flags(steps(4, 0), 4, 0, 0);
    assert_eq!(factors::gate_coverage::calculate(&input), 0.0);
}

// ── Per-factor math ──────────────────────────────────────────────────────

#[test]
fn step_coverage_is_capped_at_weight() {
    let input = all_flags(steps(20, 0), 10, 0, 0);
    assert!(approx(factors::step_coverage::calculate(&input), 0.40));

    let half = all_flags(steps(5, 0), 10, 0, 0);
    assert!(approx(factors::step_coverage::calculate(&half), 0.20));
}

#[test]
fn inspection_coverage_counts_only_inspected_steps() {
    let input = all_flags(steps(6, 1), 6, 4, 0);
    assert!(approx(factors::inspection_coverage::calculate(&input), 0.05));

    let over = all_flags(steps(6, 6), 6, 2, 0);
    assert!(approx(factors::inspection_coverage::calculate(&over), 0.20));
}

#[test]
fn gate_coverage_measures_against_proposal_steps_not_template() {
    // 3 gates over 6 proposal steps = 0.5, regardless of a 3-step template.
    let input = all_flags(steps(6, 0), 3, 0, 3);
    assert!(approx(factors::gate_coverage::calculate(&input), 0.075));
}

#[test]
fn gate_coverage_with_no_steps_uses_denominator_of_one() {
    let input = all_flags(Vec::new(), 5, 0, 2);
    assert!(approx(factors::gate_coverage::calculate(&input), 0.15));
}

#[test]
fn payment_structure_halves_are_independent() {
    let mut input = ScopeConfidenceInput::default();
    assert_eq!(factors::payment_structure::calculate(&input), 0.0);

    input.has_holdback = true;
    assert!(approx(factors::payment_structure::calculate(&input), 0.05));

    input.has_holdback = false;
    input.has_milestones = true;
    assert!(approx(factors::payment_structure::calculate(&input), 0.05));

    input.has_holdback = true;
    assert!(approx(factors::payment_structure::calculate(&input), 0.10));
}

#[test]
fn boolean_gates_are_all_or_nothing() {
    let off = ScopeConfidenceInput::default();
    let on = all_flags(Vec::new(), 0, 0, 0);

    assert_eq!(factors::code_references::calculate(&off), 0.0);
    assert_eq!(factors::code_references::calculate(&on), 0.10);
    assert_eq!(factors::warranty_terms::calculate(&off), 0.0);
    assert_eq!(factors::warranty_terms::calculate(&on), 0.05);
    assert_eq!(factors::bcin::calculate(&off), 0.0);
    assert_eq!(factors::bcin::calculate(&on), 0.05);
}

#[test]
fn step_order_does_not_affect_score() {
    let input = all_flags(steps(6, 3), 8, 4, 3);
    let mut reversed = input.clone();
    reversed.steps.reverse();

    assert_eq!(
        compute_scope_confidence(&input),
        compute_scope_confidence(&reversed)
    );
}

// ── Engine ───────────────────────────────────────────────────────────────

#[test]
fn engine_matches_free_function() {
    let engine = ScopeConfidenceEngine::new();
    let input = all_flags(steps(3, 1), 9, 3, 2);
    assert_eq!(engine.score(&input), compute_scope_confidence(&input));
}

#[test]
fn engine_batch_preserves_order() {
    let engine = ScopeConfidenceEngine::new();
    let inputs = vec![
        all_flags(steps(5, 5), 5, 5, 5),
        ScopeConfidenceInput {
            template_step_count: 10,
            ..Default::default()
        },
    ];
    let results = engine.score_batch(&inputs);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].tier, SciTier::High);
    assert_eq!(results[1].tier, SciTier::Low);
}

#[test]
fn engine_is_usable_as_trait_object() {
    let scorer: Box<dyn IScopeScorer> = Box::new(ScopeConfidenceEngine::default());
    let result = scorer.score(&ScopeConfidenceInput::default());
    assert!(approx(result.score, 0.20));
}
