#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Static score tables for every diagnostic test form, and the read-only
//! query layer over them.

/// Lookup functions over the compiled-in score tables.
pub mod parser;
/// The score tables themselves.
pub(crate) mod tables;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use parser::{
    question_info, questions_by_area, questions_by_difficulty, test_paper, test_paper_by_name,
};

use crate::error::DiagError;

/// One of the fixed diagnostic test forms. Each has its own rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum TestVariant {
    /// Entry form, middle school fundamentals.
    Mono,
    /// Intermediate form.
    Di,
    /// Advanced form, high school common math.
    Tri,
}

impl TestVariant {
    /// Every variant with a compiled rubric, in display order.
    pub const ALL: [TestVariant; 3] = [TestVariant::Mono, TestVariant::Di, TestVariant::Tri];

    /// Upper-case code used in submissions and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            TestVariant::Mono => "MONO",
            TestVariant::Di => "DI",
            TestVariant::Tri => "TRI",
        }
    }
}

impl fmt::Display for TestVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TestVariant {
    type Err = DiagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TestVariant::ALL
            .into_iter()
            .find(|v| v.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DiagError::UnknownVariant(wanted.to_string()))
    }
}

impl TryFrom<String> for TestVariant {
    type Error = DiagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Rubric difficulty, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 하
    Low,
    /// 중하
    MidLow,
    /// 중
    Mid,
    /// 상
    High,
    /// 최상
    Extreme,
}

impl Difficulty {
    /// All levels, low to extreme.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Low,
        Difficulty::MidLow,
        Difficulty::Mid,
        Difficulty::High,
        Difficulty::Extreme,
    ];

    /// The label printed on score sheets.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Low => "하",
            Difficulty::MidLow => "중하",
            Difficulty::Mid => "중",
            Difficulty::High => "상",
            Difficulty::Extreme => "최상",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single question of a test paper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInfo {
    /// Question number, `1..=N` within its paper.
    pub number:     u32,
    /// Topical area the question belongs to.
    pub area:       &'static str,
    /// Rubric difficulty.
    pub difficulty: Difficulty,
    /// Points awarded for a correct answer.
    pub score:      f64,
    /// Short description of what the question tests.
    pub content:    &'static str,
}

/// Total weight of one area within a paper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaScore {
    /// Area label.
    pub area:  &'static str,
    /// Sum of the scores of the area's questions.
    pub score: f64,
}

/// A complete rubric for one test variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPaper {
    /// The variant this paper belongs to.
    pub variant:         TestVariant,
    /// Number of questions on the paper.
    pub total_questions: usize,
    /// Declared maximum score.
    pub total_score:     f64,
    /// Questions in paper order.
    pub questions:       Vec<QuestionInfo>,
    /// Per-area weights, in order of first appearance in `questions`.
    pub area_scores:     Vec<AreaScore>,
}

impl TestPaper {
    /// Builds a paper from its question list, deriving the area weights.
    pub(crate) fn from_questions(
        variant: TestVariant,
        total_score: f64,
        questions: &[QuestionInfo],
    ) -> Self {
        let mut area_scores: Vec<AreaScore> = Vec::new();
        for q in questions {
            match area_scores.iter_mut().find(|a| a.area == q.area) {
                Some(entry) => entry.score += q.score,
                None => area_scores.push(AreaScore {
                    area:  q.area,
                    score: q.score,
                }),
            }
        }

        Self {
            variant,
            total_questions: questions.len(),
            total_score,
            questions: questions.to_vec(),
            area_scores,
        }
    }

    /// Area labels in order of first appearance.
    pub fn areas(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.area_scores.iter().map(|a| a.area)
    }

    /// Total weight of `area`, if the paper has such an area.
    pub fn area_score(&self, area: &str) -> Option<f64> {
        self.area_scores
            .iter()
            .find(|a| a.area == area)
            .map(|a| a.score)
    }

    /// Looks up a question by number.
    pub fn question(&self, number: u32) -> Option<&QuestionInfo> {
        self.questions.iter().find(|q| q.number == number)
    }
}
