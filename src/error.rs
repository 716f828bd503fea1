#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::paper::TestVariant;

/// Errors raised by the grading and reporting pipeline.
///
/// Only configuration-level problems are errors. Anomalies in a student's
/// submission (missing answers, answers to questions that do not exist) are
/// absorbed by the grader and never surface here.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DiagError {
    /// The requested test variant has no compiled rubric.
    #[error("No score table is compiled in for test variant `{0}`.")]
    UnknownVariant(String),
    /// A statistical parameter is degenerate (e.g. a non-positive standard
    /// deviation) and would make the normal approximation meaningless.
    #[error("Invalid value for `{name}`: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name:  String,
        /// The rejected value.
        value: f64,
    },
    /// An answer key was used to grade a submission of a different variant.
    #[error("Answer key is for {key} but the submission is for {submission}.")]
    KeyMismatch {
        /// Variant the answer key was written for.
        key:        TestVariant,
        /// Variant of the submission being graded.
        submission: TestVariant,
    },
}

impl DiagError {
    /// Builds an `InvalidParameter` error.
    pub fn invalid(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T, E = DiagError> = std::result::Result<T, E>;
