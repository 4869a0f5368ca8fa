use std::fmt;

use serde::Serialize;

use super::catalog::StatementCatalog;
use super::domain::{ResponseSet, StatementId, ANSWER_MAX, ANSWER_MIN};

/// One violation found while checking a [`ResponseSet`] against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseViolation {
    /// Catalog statement with no corresponding answer.
    MissingAnswer { statement: StatementId },
    /// Answer referencing an id absent from the catalog. Rejected rather
    /// than ignored so client-side id mismatches surface early.
    UnknownStatement { statement: StatementId },
    /// Answer value outside the 1-5 Likert scale.
    OutOfRangeAnswer { statement: StatementId, value: u8 },
}

impl fmt::Display for ResponseViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseViolation::MissingAnswer { statement } => {
                write!(f, "missing answer for statement {statement}")
            }
            ResponseViolation::UnknownStatement { statement } => {
                write!(f, "answer for unknown statement {statement}")
            }
            ResponseViolation::OutOfRangeAnswer { statement, value } => {
                write!(
                    f,
                    "answer {value} for statement {statement} outside [{ANSWER_MIN}, {ANSWER_MAX}]"
                )
            }
        }
    }
}

/// Aggregate validation failure carrying every violation found.
///
/// The validator runs to completion instead of stopping at the first
/// problem, so a caller can fix a malformed response set in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub violations: Vec<ResponseViolation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "response set failed validation: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Check a response set against the catalog: exactly one in-range answer per
/// catalog statement, no answers for unknown ids. Pure predicate.
pub fn validate(
    responses: &ResponseSet,
    catalog: &StatementCatalog,
) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    for id in catalog.ids() {
        if !responses.contains_key(&id) {
            violations.push(ResponseViolation::MissingAnswer { statement: id });
        }
    }

    for (&id, &value) in responses {
        if !catalog.contains(id) {
            violations.push(ResponseViolation::UnknownStatement { statement: id });
        }
        if !(ANSWER_MIN..=ANSWER_MAX).contains(&value) {
            violations.push(ResponseViolation::OutOfRangeAnswer {
                statement: id,
                value,
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}
