//! # reno-scoring
//!
//! Scope Confidence Index (SCI): how complete and trustworthy a proposal's
//! documented scope is, as a 0–1 score, a HIGH/MEDIUM/LOW tier and a
//! per-signal breakdown.
//!
//! ## Contributions
//! 1. **Step coverage** (0.40) — proposal steps vs. template steps
//! 2. **Inspection coverage** (0.20) — inspection-gated steps vs. expected
//! 3. **Gate coverage** (0.15) — expected gates vs. proposal steps
//! 4. **Code references** (0.10)
//! 5. **Payment structure** (0.05 holdback + 0.05 milestones)
//! 6. **Warranty terms** (0.05)
//! 7. **BCIN bonus** (+0.05, on top of the base 100%)

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::ScopeConfidenceEngine;
pub use formula::compute_scope_confidence;
