use crate::models::{SciResult, ScopeConfidenceInput};

/// Weighted scope-confidence scoring.
///
/// Total over its input: implementations never fail.
pub trait IScopeScorer: Send + Sync {
    fn score(&self, input: &ScopeConfidenceInput) -> SciResult;
}
