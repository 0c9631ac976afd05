use reno_core::models::{SciBreakdown, SciResult, SciTier, ScopeConfidenceInput};

use crate::factors;

/// 7-factor additive scope-confidence formula.
///
/// ```text
/// score = stepCoverage
///       + inspectionCoverage
///       + gateCoverage
///       + codeReferences
///       + paymentStructure
///       + warrantyTerms
///       + bcinBonus
/// ```
///
/// The raw total is snapped to nine decimal places before clamping to
/// [0.0, 1.0], so weight sums that land exactly on a tier threshold are
/// classified by that threshold. The breakdown keeps the unclamped
/// contributions.
pub fn compute_scope_confidence(input: &ScopeConfidenceInput) -> SciResult {
    let breakdown = compute_breakdown(input);
    let score = snap(breakdown.raw_total()).clamp(0.0, 1.0);

    SciResult {
        score,
        tier: SciTier::from_score(score),
        breakdown,
    }
}

/// Scores resolve to 1e-9; anything finer is summation noise.
const SCORE_SCALE: f64 = 1e9;

/// Round away floating-point residue from summing the weights.
fn snap(raw: f64) -> f64 {
    (raw * SCORE_SCALE).round() / SCORE_SCALE
}

/// Compute each contribution individually.
pub fn compute_breakdown(input: &ScopeConfidenceInput) -> SciBreakdown {
    SciBreakdown {
        step_coverage: factors::step_coverage::calculate(input),
        inspection_coverage: factors::inspection_coverage::calculate(input),
        gate_coverage: factors::gate_coverage::calculate(input),
        code_references: factors::code_references::calculate(input),
        payment_structure: factors::payment_structure::calculate(input),
        warranty_terms: factors::warranty_terms::calculate(input),
        bcin_bonus: factors::bcin::calculate(input),
    }
}
