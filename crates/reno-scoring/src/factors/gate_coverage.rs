use reno_core::constants::GATE_COVERAGE_WEIGHT;
use reno_core::models::ScopeConfidenceInput;

use super::capped_ratio;

/// Gate coverage: `min(expectedGates / max(steps, 1), 1) × 0.15`.
///
/// Range: 0.0 – 0.15.
/// Gates are measured against the proposal's own steps, not the template.
pub fn calculate(input: &ScopeConfidenceInput) -> f64 {
    if input.total_gates == 0 {
        return 0.0;
    }
    capped_ratio(input.total_gates as usize, input.steps.len().max(1)) * GATE_COVERAGE_WEIGHT
}
