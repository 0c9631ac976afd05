use reno_core::constants::WARRANTY_TERMS_WEIGHT;
use reno_core::models::ScopeConfidenceInput;

pub fn calculate(input: &ScopeConfidenceInput) -> f64 {
    if input.has_warranty_terms {
        WARRANTY_TERMS_WEIGHT
    } else {
        0.0
    }
}
