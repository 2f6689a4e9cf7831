//! Input validation for rostering problems.
//!
//! Checks structural integrity of the worker pool and the planning period
//! before any catalog or graph is built. Detects:
//! - Duplicate worker IDs
//! - Malformed planning periods (month outside 1-12, unrepresentable dates)
//!
//! Caps and quotas are unsigned in the data model, so negative workloads
//! are unrepresentable rather than checked here.

use crate::models::{PlanningPeriod, Worker};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers share the same ID.
    DuplicateId,
    /// The planning period does not describe a representable calendar month.
    InvalidPeriod,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an invalid-period error.
    pub(crate) fn invalid_period(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidPeriod, message)
    }
}

/// Validates the input data for a rostering problem.
///
/// Checks:
/// 1. No duplicate worker IDs
/// 2. A month period names a month in 1-12 and a representable year
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workers: &[Worker], period: &PlanningPeriod) -> ValidationResult {
    let mut errors = Vec::new();

    let mut worker_ids = HashSet::new();
    for w in workers {
        if !worker_ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }
    }

    if let PlanningPeriod::Month { year, month } = *period {
        if !(1..=12).contains(&month) {
            errors.push(ValidationError::invalid_period(format!(
                "Month {month} is outside 1-12"
            )));
        } else if period.first_day().is_none() {
            errors.push(ValidationError::invalid_period(format!(
                "Month {year}-{month:02} is not representable"
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
