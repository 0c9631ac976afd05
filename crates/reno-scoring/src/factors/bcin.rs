use reno_core::constants::BCIN_BONUS_WEIGHT;
use reno_core::models::ScopeConfidenceInput;

/// BCIN bonus: +0.05 for a BCIN-verified designer.
///
/// Sits outside the normalized 100%, so it is the one contribution that can
/// push the raw total above 1.0.
pub fn calculate(input: &ScopeConfidenceInput) -> f64 {
    if input.has_bcin {
        BCIN_BONUS_WEIGHT
    } else {
        0.0
    }
}
