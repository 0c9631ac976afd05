use reno_core::models::{SciResult, ScopeConfidenceInput};
use reno_core::traits::IScopeScorer;

use crate::formula;

/// Scope-confidence engine wrapping the 7-factor formula.
///
/// Stateless; share one instance freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeConfidenceEngine;

impl ScopeConfidenceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a batch of inputs, preserving order.
    pub fn score_batch(&self, inputs: &[ScopeConfidenceInput]) -> Vec<SciResult> {
        inputs.iter().map(|input| self.score(input)).collect()
    }
}

impl IScopeScorer for ScopeConfidenceEngine {
    fn score(&self, input: &ScopeConfidenceInput) -> SciResult {
        let result = formula::compute_scope_confidence(input);
        let excess = result.clamped_excess();
        tracing::debug!(
            score = result.score,
            tier = %result.tier,
            steps = input.steps.len(),
            clamped_excess = excess,
            "scope confidence computed"
        );
        result
    }
}
