use reno_core::constants::INSPECTION_COVERAGE_WEIGHT;
use reno_core::models::ScopeConfidenceInput;

use super::capped_ratio;

/// Inspection coverage: `min(inspectionSteps / expectedInspections, 1) × 0.20`.
///
/// Range: 0.0 – 0.20.
/// No expected inspections earns the full 0.20, unlike step coverage's
/// zero-template rule: a job type with nothing to inspect is fully covered.
pub fn calculate(input: &ScopeConfidenceInput) -> f64 {
    if input.total_inspections == 0 {
        return INSPECTION_COVERAGE_WEIGHT;
    }
    capped_ratio(
        input.inspection_step_count(),
        input.total_inspections as usize,
    ) * INSPECTION_COVERAGE_WEIGHT
}
