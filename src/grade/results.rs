#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::paper::{Difficulty, TestVariant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of a single question. Scoring is all or nothing.
pub struct QuestionResult {
    /// Question number.
    pub number:       u32,
    /// Area of the question.
    pub area:         String,
    /// Rubric difficulty.
    pub difficulty:   Difficulty,
    /// Points available.
    pub score:        f64,
    /// Points earned, either `0` or `score`.
    pub earned_score: f64,
    /// Whether the answer was accepted.
    pub is_correct:   bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Aggregate for one area of the paper.
///
/// `tscore` and `percentile` are left empty by the grader and filled in when
/// a report is assembled.
pub struct AreaResult {
    /// Area label.
    pub area:         String,
    /// Points earned in this area.
    pub earned_score: f64,
    /// Points available in this area.
    pub total_score:  f64,
    /// Normalized score, once computed.
    pub tscore:       Option<f64>,
    /// Percentile, once computed.
    pub percentile:   Option<f64>,
}

impl AreaResult {
    /// Earned points as a percentage of the area's weight.
    pub fn rate(&self) -> f64 {
        if self.total_score > 0.0 {
            self.earned_score / self.total_score * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Aggregate for one difficulty level.
pub struct DifficultyResult {
    /// The level.
    pub difficulty:    Difficulty,
    /// Questions answered correctly at this level.
    pub correct_count: usize,
    /// Questions at this level.
    pub total_count:   usize,
    /// Points earned at this level.
    pub earned_score:  f64,
    /// Points available at this level.
    pub total_score:   f64,
    /// `correct_count / total_count * 100`.
    pub correct_rate:  f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Everything the grader knows about one submission.
pub struct GradingResult {
    /// Variant that was graded.
    pub variant:            TestVariant,
    /// One entry per question, in paper order.
    pub question_results:   Vec<QuestionResult>,
    /// One entry per area, in order of first appearance on the paper.
    pub area_results:       Vec<AreaResult>,
    /// One entry per difficulty level present, easiest first.
    pub difficulty_results: Vec<DifficultyResult>,
    /// Sum of earned points.
    pub total_score:        f64,
    /// Maximum possible score.
    pub max_score:          f64,
    /// Questions on the paper that had no answer.
    pub missing:            Vec<u32>,
    /// Answered question numbers that are not on the paper.
    pub ignored:            Vec<u32>,
}

impl GradingResult {
    /// Numbers of the questions that were not answered correctly.
    pub fn incorrect_questions(&self) -> Vec<u32> {
        self.question_results
            .iter()
            .filter(|q| !q.is_correct)
            .map(|q| q.number)
            .collect()
    }

    /// How many questions were answered correctly.
    pub fn correct_count(&self) -> usize {
        self.question_results
            .iter()
            .filter(|q| q.is_correct)
            .count()
    }

    /// Looks up the aggregate for `area`.
    pub fn area(&self, area: &str) -> Option<&AreaResult> {
        self.area_results.iter().find(|a| a.area == area)
    }

    /// Looks up the aggregate for `difficulty`.
    pub fn difficulty(&self, difficulty: Difficulty) -> Option<&DifficultyResult> {
        self.difficulty_results
            .iter()
            .find(|d| d.difficulty == difficulty)
    }
}

impl Display for GradingResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.1}/{:.1}", self.variant, self.total_score, self.max_score)
    }
}
