//! # reno-core
//!
//! Foundation crate for renovation proposal scoring.
//! Defines the step and proposal snapshots, the scope-confidence and
//! payment-milestone value types, the weight constants, the engine traits,
//! errors and configuration. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RenoConfig;
pub use errors::{RenoError, RenoResult};
pub use models::{
    JobTemplate, MilestoneSchedule, PaymentMilestone, ProfessionalProfile, ProposalSnapshot,
    SciBreakdown, SciResult, SciTier, ScopeConfidenceInput, Step,
};
