use reno_core::config::RenoConfig;
use reno_core::errors::{RenoError, RenoResult};
use reno_core::models::{
    JobTemplate, MilestoneSchedule, ProposalSnapshot, SciResult, ScopeConfidenceInput,
};
use reno_core::traits::IScopeScorer;
use reno_milestones::MilestoneAllocator;
use reno_observability::{milestones_span, report_span, scoring_span};
use reno_scoring::ScopeConfidenceEngine;
use tracing::info;

use crate::report::ProposalReport;

/// Builds proposal reports against the configured job templates.
pub struct ReportBuilder {
    config: RenoConfig,
    scorer: ScopeConfidenceEngine,
    allocator: MilestoneAllocator,
}

impl ReportBuilder {
    pub fn new(config: RenoConfig) -> Self {
        Self {
            config,
            scorer: ScopeConfidenceEngine::new(),
            allocator: MilestoneAllocator::new(),
        }
    }

    pub fn config(&self) -> &RenoConfig {
        &self.config
    }

    /// Template for the proposal's job category.
    pub fn template_for(&self, proposal: &ProposalSnapshot) -> RenoResult<&JobTemplate> {
        self.config
            .template(&proposal.job_category)
            .ok_or_else(|| RenoError::UnknownJobCategory {
                category: proposal.job_category.clone(),
            })
    }

    /// Scope Confidence Index only.
    pub fn score(&self, proposal: &ProposalSnapshot) -> RenoResult<SciResult> {
        let _span = scoring_span!(proposal.id).entered();
        let template = self.template_for(proposal)?;
        let input = ScopeConfidenceInput::from_proposal(proposal, template);
        Ok(self.scorer.score(&input))
    }

    /// Payment schedule only. Needs no template, so it cannot fail.
    pub fn schedule(&self, proposal: &ProposalSnapshot) -> MilestoneSchedule {
        let _span = milestones_span!(proposal.id, proposal.estimated_cost).entered();
        self.allocator
            .schedule(&proposal.steps, proposal.estimated_cost)
    }

    /// Full report: SCI and payment schedule.
    pub fn build(&self, proposal: &ProposalSnapshot) -> RenoResult<ProposalReport> {
        let _span = report_span!(proposal.id, proposal.job_category).entered();
        let sci = self.score(proposal)?;
        let schedule = self.schedule(proposal);

        info!(
            tier = %sci.tier,
            score = sci.score,
            milestones = schedule.milestones.len(),
            "proposal report built"
        );

        Ok(ProposalReport {
            proposal_id: proposal.id.clone(),
            title: proposal.title.clone(),
            job_category: proposal.job_category.clone(),
            currency: self.config.report.currency.clone(),
            estimated_cost: proposal.estimated_cost,
            sci,
            schedule,
        })
    }
}
