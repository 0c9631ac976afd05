//! Scoring weights, tier thresholds and milestone constants.
//!
//! The six base weights sum to 1.0. The BCIN bonus sits on top of them and is
//! the only contribution that can push the raw sum past 1.0.

// --- Scope confidence weights ---

/// Proposal steps vs. the reference template's step count.
pub const STEP_COVERAGE_WEIGHT: f64 = 0.40;
/// Inspection-gated steps vs. expected inspections for the job type.
pub const INSPECTION_COVERAGE_WEIGHT: f64 = 0.20;
/// Expected quality gates vs. proposal steps.
pub const GATE_COVERAGE_WEIGHT: f64 = 0.15;
/// Building-code references cited in the proposal.
pub const CODE_REFERENCES_WEIGHT: f64 = 0.10;
/// Holdback half of the payment-structure contribution.
pub const HOLDBACK_WEIGHT: f64 = 0.05;
/// Milestone half of the payment-structure contribution.
pub const MILESTONES_WEIGHT: f64 = 0.05;
/// Full payment-structure contribution (holdback + milestones).
pub const PAYMENT_STRUCTURE_WEIGHT: f64 = HOLDBACK_WEIGHT + MILESTONES_WEIGHT;
/// Written warranty terms present.
pub const WARRANTY_TERMS_WEIGHT: f64 = 0.05;
/// BCIN-verified designer on the proposal. Additive bonus.
pub const BCIN_BONUS_WEIGHT: f64 = 0.05;

// --- Tier thresholds (lower bound inclusive) ---

pub const HIGH_TIER_THRESHOLD: f64 = 0.80;
pub const MEDIUM_TIER_THRESHOLD: f64 = 0.50;

// --- Payment milestones ---

/// Deposit share of the estimated cost, as a percent.
pub const DEPOSIT_PERCENT: f64 = 10.0;
/// Deposit share of the estimated cost, as a fraction.
pub const DEPOSIT_FRACTION: f64 = 0.10;
/// Total percent a complete schedule allocates.
pub const FULL_ALLOCATION_PERCENT: f64 = 100.0;

pub const DEPOSIT_LABEL: &str = "Deposit";
pub const DEPOSIT_DUE: &str = "On signing";
pub const FINAL_PAYMENT_LABEL: &str = "Final Payment";
pub const FINAL_PAYMENT_DUE: &str = "Project complete";
