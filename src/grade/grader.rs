#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;

use super::{
    key::AnswerKey,
    results::{AreaResult, DifficultyResult, GradingResult, QuestionResult},
    submission::{AnswerValue, StudentSubmission},
};
use crate::{
    error::{DiagError, Result},
    paper::{Difficulty, test_paper},
};

/// Grades submissions of one variant against an answer key.
#[derive(Debug, Clone, Copy)]
pub struct AutoGrader<'a> {
    /// Accepted answers.
    key: &'a AnswerKey,
}

impl<'a> AutoGrader<'a> {
    /// Creates a grader that checks answers against `key`.
    pub fn new(key: &'a AnswerKey) -> Self {
        Self { key }
    }

    /// Grades `submission`.
    ///
    /// Unanswered questions score zero and answers to questions that are not
    /// on the paper are dropped; both are reported in the result rather than
    /// treated as errors. The only failure is a key written for another
    /// variant.
    #[tracing::instrument(skip_all, fields(variant = %submission.variant, id = ?submission.id))]
    pub fn grade(&self, submission: &StudentSubmission) -> Result<GradingResult> {
        if self.key.variant != submission.variant {
            return Err(DiagError::KeyMismatch {
                key:        self.key.variant,
                submission: submission.variant,
            });
        }

        let paper = test_paper(submission.variant);
        let answers = submission.answer_map();

        let mut missing = Vec::new();
        let question_results: Vec<QuestionResult> = paper
            .questions
            .iter()
            .map(|q| {
                let is_correct = match (answers.get(&q.number), self.key.expected(q.number)) {
                    (None, _) => {
                        missing.push(q.number);
                        false
                    }
                    (Some(AnswerValue::Marked(correct)), _) => *correct,
                    (Some(value), Some(expected)) => expected.accepts(value),
                    (Some(_), None) => {
                        tracing::warn!(
                            "No key entry for {} question {}; counting it as incorrect",
                            paper.variant,
                            q.number
                        );
                        false
                    }
                };

                QuestionResult {
                    number: q.number,
                    area: q.area.to_string(),
                    difficulty: q.difficulty,
                    score: q.score,
                    earned_score: if is_correct { q.score } else { 0.0 },
                    is_correct,
                }
            })
            .collect();

        let ignored: Vec<u32> = answers
            .keys()
            .copied()
            .filter(|n| paper.question(*n).is_none())
            .collect();
        if !ignored.is_empty() {
            tracing::warn!(
                "Ignoring answers to questions not on the {} paper: {:?}",
                paper.variant,
                ignored
            );
        }
        if !missing.is_empty() {
            tracing::debug!("Unanswered questions scored as incorrect: {:?}", missing);
        }

        let area_results = paper
            .area_scores
            .iter()
            .map(|area| AreaResult {
                area:         area.area.to_string(),
                earned_score: question_results
                    .iter()
                    .filter(|r| r.area == area.area)
                    .map(|r| r.earned_score)
                    .sum(),
                total_score:  area.score,
                tscore:       None,
                percentile:   None,
            })
            .collect();

        let difficulty_results = difficulty_breakdown(&question_results);
        let total_score: f64 = question_results.iter().map(|r| r.earned_score).sum();

        Ok(GradingResult {
            variant: paper.variant,
            question_results,
            area_results,
            difficulty_results,
            total_score,
            max_score: paper.total_score,
            missing,
            ignored,
        })
    }
}

/// Groups question results by difficulty, keeping only the levels present.
fn difficulty_breakdown(results: &[QuestionResult]) -> Vec<DifficultyResult> {
    let groups = results.iter().into_group_map_by(|r| r.difficulty);

    Difficulty::ALL
        .into_iter()
        .filter_map(|difficulty| {
            let group = groups.get(&difficulty)?;
            let correct_count = group.iter().filter(|r| r.is_correct).count();
            let total_count = group.len();
            Some(DifficultyResult {
                difficulty,
                correct_count,
                total_count,
                earned_score: group.iter().map(|r| r.earned_score).sum(),
                total_score: group.iter().map(|r| r.score).sum(),
                correct_rate: correct_count as f64 / total_count as f64 * 100.0,
            })
        })
        .collect()
}
