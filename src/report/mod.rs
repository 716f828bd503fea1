#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Report assembly.
pub mod assemble;
/// Narrative commentary tables.
pub mod commentary;
/// Terminal rendering of papers, norms and reports.
pub mod render;

pub use assemble::{AreaReport, ReportAssembler, ReportData};
pub use commentary::{Comment, CommentaryTable, floor_lookup};
pub use render::{render_norms, render_paper, render_report};

use crate::{
    config::Settings,
    error::Result,
    grade::{AnswerKey, AutoGrader, StudentSubmission},
};

/// Grades `submission` with `key` and assembles the report in one go.
pub fn generate_report(
    submission: &StudentSubmission,
    key: &AnswerKey,
    settings: &Settings,
) -> Result<ReportData> {
    let grading = AutoGrader::new(key).grade(submission)?;
    ReportAssembler::from_settings(settings).assemble(submission, grading)
}
