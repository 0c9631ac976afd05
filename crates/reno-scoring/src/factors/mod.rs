//! One module per SCI contribution. Each `calculate` returns the weighted
//! contribution, already capped at its weight.

pub mod bcin;
pub mod code_references;
pub mod gate_coverage;
pub mod inspection_coverage;
pub mod payment_structure;
pub mod step_coverage;
pub mod warranty_terms;

/// `min(numerator / denominator, 1)`. Callers guard the zero denominator.
pub(crate) fn capped_ratio(numerator: usize, denominator: usize) -> f64 {
    (numerator as f64 / denominator as f64).min(1.0)
}
