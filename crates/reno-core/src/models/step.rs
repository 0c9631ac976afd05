use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One unit of work in a contractor's proposed sequence.
///
/// Read-only snapshot: the proposal stores its steps at send time and the
/// scoring core never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Step {
    /// Position within the sequence. Not necessarily contiguous.
    pub step_number: u32,
    /// Display label; doubles as the milestone label when the step pays out.
    pub title: String,
    /// A code inspection gates completion of this step.
    #[serde(default)]
    pub requires_inspection: bool,
    /// Completing this step releases a payment.
    #[serde(default)]
    pub triggers_payment: bool,
    /// Percent of total project cost released on completion (0–100).
    #[serde(default)]
    pub typical_cost_percent: Option<f64>,
}

impl Step {
    pub fn new(step_number: u32, title: impl Into<String>) -> Self {
        Self {
            step_number,
            title: title.into(),
            requires_inspection: false,
            triggers_payment: false,
            typical_cost_percent: None,
        }
    }

    /// Mark the step as gated by an inspection.
    pub fn with_inspection(mut self) -> Self {
        self.requires_inspection = true;
        self
    }

    /// Mark the step as releasing `percent` of the project cost.
    pub fn with_payment(mut self, percent: f64) -> Self {
        self.triggers_payment = true;
        self.typical_cost_percent = Some(percent);
        self
    }

    /// The percent this step contributes to a payment schedule, if any.
    ///
    /// A step qualifies only when it triggers payment and carries a
    /// non-zero cost percent. A zero or NaN percent counts as absent.
    pub fn payment_percent(&self) -> Option<f64> {
        if !self.triggers_payment {
            return None;
        }
        self.typical_cost_percent
            .filter(|percent| *percent != 0.0 && !percent.is_nan())
    }
}
