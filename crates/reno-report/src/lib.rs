//! # reno-report
//!
//! Assembles what a proposal page or printable document shows: the Scope
//! Confidence Index and the payment schedule for one stored proposal.
//! Rendering is left to the caller; the report serializes to JSON.

pub mod builder;
pub mod report;
pub mod snapshot;

pub use builder::ReportBuilder;
pub use report::ProposalReport;
pub use snapshot::{load_snapshot, parse_snapshot};
