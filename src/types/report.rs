use crate::types::metrics::{ComplexityEntry, MaintainabilityEntry};
use serde::Serialize;

/// Everything a rendered report shows.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub project_name: String,
    pub generated_at: String,
    pub maintainability: Vec<MaintainabilityEntry>,
    pub complexity: Vec<ComplexityEntry>,
}
