use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::Step;
use crate::constants::{HIGH_TIER_THRESHOLD, MEDIUM_TIER_THRESHOLD};

/// Everything the scope-confidence scorer looks at, assembled fresh per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfidenceInput {
    /// The proposal's own steps. Only counted and filtered, never reordered.
    pub steps: Vec<Step>,
    /// Step count of the reference template for this job type.
    pub template_step_count: u32,
    /// Inspections expected for this job type.
    pub total_inspections: u32,
    /// Quality gates expected for this job type.
    pub total_gates: u32,
    pub has_code_references: bool,
    pub has_holdback: bool,
    pub has_milestones: bool,
    pub has_warranty_terms: bool,
    /// A BCIN-verified designer is attached to the proposal.
    pub has_bcin: bool,
}

impl ScopeConfidenceInput {
    /// Number of proposal steps gated by an inspection.
    pub fn inspection_step_count(&self) -> usize {
        self.steps.iter().filter(|s| s.requires_inspection).count()
    }
}

/// Three-band classification of a scope-confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum SciTier {
    High,
    Medium,
    Low,
}

impl SciTier {
    /// Classify a clamped score. Each band includes its lower bound.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_TIER_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_TIER_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Badge label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for SciTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weighted contribution of each scoring signal.
///
/// Values are the contributions themselves (already multiplied by their
/// weight), not raw ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SciBreakdown {
    pub step_coverage: f64,
    pub inspection_coverage: f64,
    pub gate_coverage: f64,
    pub code_references: f64,
    pub payment_structure: f64,
    pub warranty_terms: f64,
    pub bcin_bonus: f64,
}

impl SciBreakdown {
    /// Unclamped sum of all seven contributions.
    pub fn raw_total(&self) -> f64 {
        self.step_coverage
            + self.inspection_coverage
            + self.gate_coverage
            + self.code_references
            + self.payment_structure
            + self.warranty_terms
            + self.bcin_bonus
    }
}

/// Scope Confidence Index for one proposal.
///
/// The breakdown is not rescaled when the score is clamped, so it can sum to
/// more than `score` when the BCIN bonus pushes the raw total past 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SciResult {
    /// Clamped to [0.0, 1.0].
    pub score: f64,
    pub tier: SciTier,
    pub breakdown: SciBreakdown,
}

impl SciResult {
    /// How much of the raw total the clamp discarded (0.0 when not clamped).
    pub fn clamped_excess(&self) -> f64 {
        (self.breakdown.raw_total() - self.score).max(0.0)
    }
}
