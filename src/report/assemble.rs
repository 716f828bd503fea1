#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

use super::commentary::CommentaryTable;
use crate::{
    config::{NormTable, Settings},
    error::Result,
    grade::{
        DifficultyResult, GradingResult, Norm, ScoreMeasures, StudentProfile, StudentSubmission,
        measure,
    },
    paper::TestVariant,
};

/// Report section for one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaReport {
    /// Area label.
    pub area:         String,
    /// Points earned in the area.
    pub earned_score: f64,
    /// Points available in the area.
    pub total_score:  f64,
    /// Earned points as a percentage of the area's weight.
    pub rate:         f64,
    /// Normative measures for the area.
    pub measures:     ScoreMeasures,
    /// Whether the area has its own calibrated norm. When it does not, the
    /// area rate is measured against the whole-paper norm.
    pub calibrated:   bool,
    /// Narrative comment for the area.
    pub comment:      Option<String>,
}

/// A finished diagnostic report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    /// Identifier of the submission the report was built from.
    pub submission_id:   Option<String>,
    /// Which paper was taken.
    pub variant:         TestVariant,
    /// Who took it.
    pub student:         StudentProfile,
    /// Grading output, with area T-scores and percentiles filled in.
    pub grading:         GradingResult,
    /// Measures for the total score.
    pub total:           ScoreMeasures,
    /// Per-area sections, in paper order.
    pub areas:           Vec<AreaReport>,
    /// Narrative comment for the whole paper.
    pub overall_comment: Option<String>,
}

impl ReportData {
    /// Per-difficulty breakdown.
    pub fn difficulty_results(&self) -> &[DifficultyResult] {
        &self.grading.difficulty_results
    }

    /// Questions to review with the student.
    pub fn incorrect_questions(&self) -> Vec<u32> {
        self.grading.incorrect_questions()
    }
}

/// Combines grading output with norms and commentary.
#[derive(Debug, Clone, Copy)]
pub struct ReportAssembler<'a> {
    /// Population norms.
    norms:      &'a NormTable,
    /// Commentary tables.
    commentary: &'a CommentaryTable,
}

impl<'a> ReportAssembler<'a> {
    /// Creates an assembler over the given static tables.
    pub fn new(norms: &'a NormTable, commentary: &'a CommentaryTable) -> Self {
        Self { norms, commentary }
    }

    /// Creates an assembler over a settings bundle.
    pub fn from_settings(settings: &'a Settings) -> Self {
        Self::new(&settings.norms, &settings.commentary)
    }

    /// Builds the report for `grading`, taking identity fields from
    /// `submission`.
    pub fn assemble(
        &self,
        submission: &StudentSubmission,
        mut grading: GradingResult,
    ) -> Result<ReportData> {
        if submission.variant != grading.variant {
            tracing::warn!(
                "Submission says {} but the grading result is for {}; reporting on {}",
                submission.variant,
                grading.variant,
                grading.variant
            );
        }

        let norms = self.norms.get(grading.variant)?;
        let total = measure(grading.total_score, &norms.overall)?;

        let mut areas = Vec::with_capacity(grading.area_results.len());
        for area in grading.area_results.iter_mut() {
            let (raw, norm, calibrated): (f64, Norm, bool) = match norms.area(&area.area) {
                Some(norm) => (area.earned_score, *norm, true),
                None => (area.rate() / 100.0 * grading.max_score, norms.overall, false),
            };
            let measures = measure(raw, &norm)?;

            area.tscore = Some(measures.tscore);
            area.percentile = Some(measures.percentile);

            areas.push(AreaReport {
                area: area.area.clone(),
                earned_score: area.earned_score,
                total_score: area.total_score,
                rate: area.rate(),
                measures,
                calibrated,
                comment: self
                    .commentary
                    .area_comment(&area.area, area.rate())
                    .map(str::to_string),
            });
        }

        let overall_comment = self
            .commentary
            .overall_comment(total.tscore)
            .map(str::to_string);

        Ok(ReportData {
            submission_id: submission.id.clone(),
            variant: grading.variant,
            student: submission.student.clone(),
            grading,
            total,
            areas,
            overall_comment,
        })
    }
}
