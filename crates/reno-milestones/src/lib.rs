//! # reno-milestones
//!
//! Derives a proposal's payment schedule from its step snapshot:
//! a 10% deposit on signing, one release per payment-triggering step in step
//! order, and a final payment for whatever remains below 100%.
//!
//! Overshoot past 100% and per-milestone rounding drift are reported by
//! [`schedule::summarize`] but never corrected.

pub mod derive;
pub mod engine;
pub mod schedule;

pub use derive::derive_payment_milestones;
pub use engine::MilestoneAllocator;
pub use schedule::{derive_schedule, summarize};
