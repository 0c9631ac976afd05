// Single source of truth for all default values.

use crate::models::JobTemplate;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Report ---
pub const DEFAULT_CURRENCY: &str = "CAD";

// --- Environment ---
pub const ENV_LOG_LEVEL: &str = "RENO_LOG_LEVEL";

// --- Job templates: (category, steps, inspections, gates) ---
const BUILTIN_TEMPLATES: &[(&str, u32, u32, u32)] = &[
    ("kitchen", 12, 3, 4),
    ("bathroom", 10, 3, 3),
    ("basement", 14, 4, 5),
    ("addition", 18, 6, 6),
];

pub fn default_templates() -> Vec<JobTemplate> {
    BUILTIN_TEMPLATES
        .iter()
        .map(|&(category, steps, inspections, gates)| {
            JobTemplate::new(category, steps, inspections, gates)
        })
        .collect()
}
