use std::sync::OnceLock;

use super::{
    Difficulty, QuestionInfo, TestPaper, TestVariant,
    tables::{DI, MONO, TOTAL_SCORE, TRI},
};
use crate::error::Result;

/// Lazily built papers, one slot per variant.
static MONO_PAPER: OnceLock<TestPaper> = OnceLock::new();
/// See [`MONO_PAPER`].
static DI_PAPER: OnceLock<TestPaper> = OnceLock::new();
/// See [`MONO_PAPER`].
static TRI_PAPER: OnceLock<TestPaper> = OnceLock::new();

/// Returns the rubric for `variant`.
///
/// Papers are assembled on first use and shared for the rest of the process.
pub fn test_paper(variant: TestVariant) -> &'static TestPaper {
    let (slot, questions) = match variant {
        TestVariant::Mono => (&MONO_PAPER, &MONO[..]),
        TestVariant::Di => (&DI_PAPER, &DI[..]),
        TestVariant::Tri => (&TRI_PAPER, &TRI[..]),
    };
    slot.get_or_init(|| TestPaper::from_questions(variant, TOTAL_SCORE, questions))
}

/// Resolves a paper from its variant code, e.g. `"MONO"`.
pub fn test_paper_by_name(name: &str) -> Result<&'static TestPaper> {
    Ok(test_paper(name.parse()?))
}

/// Looks up a single question. Returns `None` when `number` is outside the
/// paper's range.
pub fn question_info(variant: TestVariant, number: u32) -> Option<&'static QuestionInfo> {
    test_paper(variant).question(number)
}

/// All questions of `area`, in paper order. Unknown areas yield an empty list.
pub fn questions_by_area(variant: TestVariant, area: &str) -> Vec<&'static QuestionInfo> {
    test_paper(variant)
        .questions
        .iter()
        .filter(|q| q.area == area)
        .collect()
}

/// All questions of the given difficulty, in paper order.
pub fn questions_by_difficulty(
    variant: TestVariant,
    difficulty: Difficulty,
) -> Vec<&'static QuestionInfo> {
    test_paper(variant)
        .questions
        .iter()
        .filter(|q| q.difficulty == difficulty)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_is_built_once() {
        let a = test_paper(TestVariant::Di) as *const TestPaper;
        let b = test_paper(TestVariant::Di) as *const TestPaper;
        assert_eq!(a, b);
    }

    #[test]
    fn by_name_is_case_insensitive() {
        let paper = test_paper_by_name(" tri ").expect("known variant");
        assert_eq!(paper.variant, TestVariant::Tri);
    }
}
