use serde::{Deserialize, Serialize};

use super::{ScopeConfidenceInput, Step};

/// Professional attached to a proposal (designer or contractor of record).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalProfile {
    pub name: String,
    /// Holds a verified Building Code Identification Number.
    pub bcin_verified: bool,
}

/// Stored proposal record with its step snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalSnapshot {
    pub id: String,
    pub title: String,
    pub job_category: String,
    /// Estimated project cost in whole currency units. Not validated here.
    pub estimated_cost: f64,
    pub steps: Vec<Step>,
    pub has_code_references: bool,
    pub has_holdback: bool,
    pub has_milestones: bool,
    pub has_warranty_terms: bool,
    pub professional: Option<ProfessionalProfile>,
}

/// Reference counts for one job category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTemplate {
    pub category: String,
    /// Steps the standard sequence for this category defines.
    pub step_count: u32,
    /// Inspections a job of this category is expected to need.
    pub inspections: u32,
    /// Quality gates a job of this category is expected to pass.
    pub gates: u32,
}

impl JobTemplate {
    pub fn new(category: impl Into<String>, step_count: u32, inspections: u32, gates: u32) -> Self {
        Self {
            category: category.into(),
            step_count,
            inspections,
            gates,
        }
    }
}

impl ScopeConfidenceInput {
    /// Assemble scorer input from a stored proposal and its category template.
    ///
    /// The BCIN flag comes from the attached professional; a proposal with no
    /// professional scores without the bonus.
    pub fn from_proposal(proposal: &ProposalSnapshot, template: &JobTemplate) -> Self {
        Self {
            steps: proposal.steps.clone(),
            template_step_count: template.step_count,
            total_inspections: template.inspections,
            total_gates: template.gates,
            has_code_references: proposal.has_code_references,
            has_holdback: proposal.has_holdback,
            has_milestones: proposal.has_milestones,
            has_warranty_terms: proposal.has_warranty_terms,
            has_bcin: proposal
                .professional
                .as_ref()
                .is_some_and(|p| p.bcin_verified),
        }
    }
}
