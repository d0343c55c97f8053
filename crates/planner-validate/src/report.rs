//! Validation verdicts.
//!
//! Validation never fails as a Rust error: every check returns a
//! [`ValidationReport`] whose errors block the caller from dispatching a
//! command and whose warnings are advisory only.

use serde::Serialize;

/// Accept/reject verdict with human-readable reasons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report is valid when it carries no blocking errors. Warnings do
    /// not affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Fold another report's findings into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

/// Result of validating a batch of assignment candidates.
///
/// `items` holds one report per candidate, in input order. `overall`
/// carries cross-item findings (per-teacher overload across the batch)
/// that no single-item check can see.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub items: Vec<ValidationReport>,
    pub overall: ValidationReport,
}

impl BatchReport {
    pub fn is_valid(&self) -> bool {
        self.overall.is_valid() && self.items.iter().all(ValidationReport::is_valid)
    }
}
