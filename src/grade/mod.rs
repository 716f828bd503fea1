#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Percentile, grade band and T-score conversions.
pub mod calculator;
/// The auto grader.
pub mod grader;
/// Answer keys and answer comparison.
pub mod key;
/// Grading result types.
pub mod results;
/// Student submissions.
pub mod submission;

pub use calculator::{
    Norm, ScoreMeasures, display_tscore, grade5, grade9, measure, normal_cdf, percentile, tscore,
};
pub use grader::AutoGrader;
pub use key::{AnswerKey, ExpectedAnswer};
pub use results::{AreaResult, DifficultyResult, GradingResult, QuestionResult};
pub use submission::{AnswerValue, StudentAnswer, StudentProfile, StudentSubmission};
