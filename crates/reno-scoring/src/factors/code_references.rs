use reno_core::constants::CODE_REFERENCES_WEIGHT;
use reno_core::models::ScopeConfidenceInput;

/// 0.10 when the proposal cites building-code sections.
pub fn calculate(input: &ScopeConfidenceInput) -> f64 {
    if input.has_code_references {
        CODE_REFERENCES_WEIGHT
    } else {
        0.0
    }
}
