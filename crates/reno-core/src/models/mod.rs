pub mod milestone;
pub mod proposal;
pub mod sci;
pub mod step;

pub use milestone::{MilestoneSchedule, PaymentMilestone};
pub use proposal::{JobTemplate, ProfessionalProfile, ProposalSnapshot};
pub use sci::{SciBreakdown, SciResult, SciTier, ScopeConfidenceInput};
pub use step::Step;
