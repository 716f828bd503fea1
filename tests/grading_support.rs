#![allow(dead_code)]

use std::path::PathBuf;

use mathdiag::{
    grade::{AnswerKey, StudentAnswer, StudentProfile, StudentSubmission},
    paper::{TestVariant, test_paper},
};

pub fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(path)
}

/// A key whose answer to question `n` is the number `n`.
pub fn numbered_key(variant: TestVariant) -> AnswerKey {
    test_paper(variant)
        .questions
        .iter()
        .fold(AnswerKey::new(variant), |key, q| key.with(q.number, f64::from(q.number)))
}

/// Answers every question listed by `correct` right and every other one wrong,
/// against [`numbered_key`].
pub fn submission_where(variant: TestVariant, correct: impl Fn(u32) -> bool) -> StudentSubmission {
    let answers: Vec<StudentAnswer> = test_paper(variant)
        .questions
        .iter()
        .map(|q| {
            let value = if correct(q.number) { q.number } else { q.number + 100 };
            StudentAnswer::new(q.number, f64::from(value))
        })
        .collect();

    StudentSubmission::builder()
        .id(format!("{variant}-test"))
        .variant(variant)
        .student(StudentProfile::builder().name("테스트").build())
        .answers(answers)
        .build()
}

pub fn perfect(variant: TestVariant) -> StudentSubmission {
    submission_where(variant, |_| true)
}

pub fn blank(variant: TestVariant) -> StudentSubmission {
    StudentSubmission::builder().variant(variant).build()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
