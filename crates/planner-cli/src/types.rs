use std::path::PathBuf;

use planner_model::EntityKind;
use planner_validate::ValidationReport;

/// Outcome of re-validating every entity in a plan file.
#[derive(Debug)]
pub struct CheckResult {
    pub plan_file: PathBuf,
    pub findings: Vec<EntityFinding>,
    /// Whole-plan health check; warnings only.
    pub completeness: ValidationReport,
    pub has_errors: bool,
}

/// Validation findings for one entity.
#[derive(Debug)]
pub struct EntityFinding {
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
    pub report: ValidationReport,
}
