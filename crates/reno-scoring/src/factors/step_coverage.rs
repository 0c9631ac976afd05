use reno_core::constants::STEP_COVERAGE_WEIGHT;
use reno_core::models::ScopeConfidenceInput;

use super::capped_ratio;

/// Step coverage: `min(steps / templateSteps, 1) × 0.40`.
///
/// Range: 0.0 – 0.40.
/// A template with no steps gives 0.0: coverage against an undefined
/// template cannot be claimed.
pub fn calculate(input: &ScopeConfidenceInput) -> f64 {
    if input.template_step_count == 0 {
        return 0.0;
    }
    capped_ratio(input.steps.len(), input.template_step_count as usize) * STEP_COVERAGE_WEIGHT
}
