//! The validation report.

use chassis_catalog::CatalogError;
use chassis_core::{Violation, ViolationKind, Violations};
use thiserror::Error;

/// Errors raised by a validation run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The model carries structural violations.
    #[error("model validation failed with {count} violation(s):\n{rendered}")]
    Invalid { count: usize, rendered: String },

    /// A catalog build failed outright before validation could finish.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Aggregated result of one validation run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    violations: Violations,
}

impl ValidationReport {
    pub(crate) fn new(violations: Violations) -> Self {
        Self { violations }
    }

    /// All violations found, in discovery order.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Violations of one kind.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.of_kind(kind)
    }

    /// Returns true if the model is free of violations.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Fail with every violation rendered into one message.
    pub fn throw_if_invalid(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }
        let rendered = self
            .violations
            .all()
            .iter()
            .map(|v| format!("  {}", v))
            .collect::<Vec<_>>()
            .join("\n");
        Err(ValidationError::Invalid {
            count: self.violations.len(),
            rendered,
        })
    }
}
