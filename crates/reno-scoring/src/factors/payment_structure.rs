use reno_core::constants::{HOLDBACK_WEIGHT, MILESTONES_WEIGHT};
use reno_core::models::ScopeConfidenceInput;

/// Payment structure: holdback (0.05) and milestones (0.05), independently.
///
/// Range: 0.0 – 0.10.
pub fn calculate(input: &ScopeConfidenceInput) -> f64 {
    let holdback = if input.has_holdback { HOLDBACK_WEIGHT } else { 0.0 };
    let milestones = if input.has_milestones { MILESTONES_WEIGHT } else { 0.0 };
    holdback + milestones
}
