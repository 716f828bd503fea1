//! # mathdiag
//!
//! Grades diagnostic math tests and turns the results into normative
//! reports: per-area and per-difficulty breakdowns, percentiles, 9- and
//! 5-band relative grades, T-scores and narrative commentary.
//!
//! The pipeline is pure. A [`grade::StudentSubmission`] and an
//! [`grade::AnswerKey`] go into [`grade::AutoGrader`], which reads the
//! compiled-in rubric from [`paper`] and produces a
//! [`grade::GradingResult`]; [`report::ReportAssembler`] then combines that
//! with population norms and commentary into a [`report::ReportData`].

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Population norms and the settings bundle
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Error types
pub mod error;
/// For all things related to grading
pub mod grade;
/// Score tables and lookups over them
pub mod paper;
/// Report assembly and rendering
pub mod report;

pub use config::Settings;
pub use error::{DiagError, Result};
pub use report::generate_report;
