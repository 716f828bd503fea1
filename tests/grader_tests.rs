#[path = "grading_support.rs"]
mod grading_support;

use grading_support::{blank, fixture, numbered_key, perfect, submission_where};
use mathdiag::{
    config::read_json,
    grade::{AnswerKey, AnswerValue, AutoGrader, StudentAnswer, StudentSubmission},
    paper::{Difficulty, TestVariant, test_paper},
};

#[test]
fn perfect_paper_earns_the_maximum() {
    for variant in TestVariant::ALL {
        let key = numbered_key(variant);
        let result = AutoGrader::new(&key).grade(&perfect(variant)).expect("grade");

        assert_eq!(result.total_score, 100.0);
        assert_eq!(result.max_score, 100.0);
        assert_eq!(result.correct_count(), 25);
        assert!(result.incorrect_questions().is_empty());
        assert!(result.missing.is_empty());
    }
}

#[test]
fn unanswered_question_six_costs_its_points() {
    let key = numbered_key(TestVariant::Mono);
    let mut submission = perfect(TestVariant::Mono);
    submission.answers.retain(|a| a.question != 6);

    let result = AutoGrader::new(&key).grade(&submission).expect("grade");

    assert_eq!(result.total_score, 95.5);
    assert_eq!(result.missing, vec![6]);
    assert_eq!(result.incorrect_questions(), vec![6]);
    let q6 = &result.question_results[5];
    assert_eq!(q6.number, 6);
    assert!(!q6.is_correct);
    assert_eq!(q6.earned_score, 0.0);
    assert_eq!(result.to_string(), "MONO 95.5/100.0");
}

#[test]
fn answers_to_unknown_questions_are_ignored() {
    let key = numbered_key(TestVariant::Mono);
    let mut submission = perfect(TestVariant::Mono);
    submission.answers.push(StudentAnswer::new(999, 999));
    submission.answers.push(StudentAnswer::new(0, "0"));

    let result = AutoGrader::new(&key).grade(&submission).expect("grade");

    assert_eq!(result.total_score, 100.0);
    assert_eq!(result.ignored, vec![0, 999]);
    assert_eq!(result.question_results.len(), 25);
}

#[test]
fn empty_submission_scores_zero_without_error() {
    let key = numbered_key(TestVariant::Tri);
    let result = AutoGrader::new(&key).grade(&blank(TestVariant::Tri)).expect("grade");

    assert_eq!(result.total_score, 0.0);
    assert_eq!(result.missing.len(), 25);
    assert!(result.area_results.iter().all(|a| a.earned_score == 0.0));
    assert!(result.difficulty_results.iter().all(|d| d.correct_rate == 0.0));
}

#[test]
fn total_equals_sum_of_earned_scores() {
    let key = numbered_key(TestVariant::Di);
    let submission = submission_where(TestVariant::Di, |n| n % 3 == 0);
    let result = AutoGrader::new(&key).grade(&submission).expect("grade");

    let sum: f64 = result.question_results.iter().map(|q| q.earned_score).sum();
    assert_eq!(result.total_score, sum);
    let area_sum: f64 = result.area_results.iter().map(|a| a.earned_score).sum();
    assert_eq!(result.total_score, area_sum);
    let difficulty_sum: f64 = result.difficulty_results.iter().map(|d| d.earned_score).sum();
    assert_eq!(result.total_score, difficulty_sum);
}

#[test]
fn question_results_follow_paper_order_and_carry_rubric_data() {
    let key = numbered_key(TestVariant::Mono);
    let result = AutoGrader::new(&key)
        .grade(&submission_where(TestVariant::Mono, |n| n > 20))
        .expect("grade");

    let paper = test_paper(TestVariant::Mono);
    for (q, r) in paper.questions.iter().zip(&result.question_results) {
        assert_eq!(q.number, r.number);
        assert_eq!(q.area, r.area);
        assert_eq!(q.difficulty, r.difficulty);
        assert_eq!(q.score, r.score);
        assert_eq!(r.is_correct, q.number > 20);
    }
}

#[test]
fn area_results_use_paper_weights_and_order() {
    let key = numbered_key(TestVariant::Mono);
    let result = AutoGrader::new(&key)
        .grade(&submission_where(TestVariant::Mono, |n| n <= 6))
        .expect("grade");

    let areas: Vec<(&str, f64, f64)> = result
        .area_results
        .iter()
        .map(|a| (a.area.as_str(), a.earned_score, a.total_score))
        .collect();
    assert_eq!(areas, vec![
        ("수와 연산", 21.5, 21.5),
        ("문자와 식", 0.0, 27.5),
        ("함수", 0.0, 24.0),
        ("기하", 0.0, 27.0),
    ]);
    assert_eq!(result.area("수와 연산").map(|a| a.rate()), Some(100.0));
    assert!(result.area_results.iter().all(|a| a.tscore.is_none() && a.percentile.is_none()));
}

#[test]
fn difficulty_results_count_each_level() {
    let key = numbered_key(TestVariant::Mono);
    let result = AutoGrader::new(&key)
        .grade(&submission_where(TestVariant::Mono, |n| [1, 2, 7].contains(&n)))
        .expect("grade");

    let low = result.difficulty(Difficulty::Low).expect("low questions");
    assert_eq!(low.total_count, 5);
    assert_eq!(low.correct_count, 3);
    assert_eq!(low.earned_score, 9.0);
    assert_eq!(low.total_score, 15.0);
    assert_eq!(low.correct_rate, 60.0);

    let extreme = result.difficulty(Difficulty::Extreme).expect("extreme questions");
    assert_eq!(extreme.total_count, 4);
    assert_eq!(extreme.correct_count, 0);
    assert_eq!(extreme.total_score, 22.0);

    let levels: Vec<Difficulty> = result.difficulty_results.iter().map(|d| d.difficulty).collect();
    assert_eq!(levels, Difficulty::ALL.to_vec());
}

#[test]
fn marked_answers_are_taken_as_graded() {
    let key = AnswerKey::new(TestVariant::Mono);
    let submission = StudentSubmission::builder()
        .variant(TestVariant::Mono)
        .answers(vec![
            StudentAnswer::new(1, true),
            StudentAnswer::new(2, false),
            StudentAnswer::new(3, "whatever"),
        ])
        .build();

    let result = AutoGrader::new(&key).grade(&submission).expect("grade");

    assert!(result.question_results[0].is_correct);
    assert!(!result.question_results[1].is_correct);
    assert!(!result.question_results[2].is_correct, "no key entry means incorrect");
    assert_eq!(result.total_score, 3.0);
}

#[test]
fn grading_is_repeatable() {
    let key = numbered_key(TestVariant::Di);
    let submission = submission_where(TestVariant::Di, |n| n % 2 == 1);
    let grader = AutoGrader::new(&key);

    assert_eq!(grader.grade(&submission).expect("first"), grader.grade(&submission).expect("second"));
}

#[test]
fn fixture_submission_grades_as_expected() {
    let key: AnswerKey = read_json(fixture("mono/key.json")).expect("key");
    let submission: StudentSubmission = read_json(fixture("mono/submission.json")).expect("submission");

    assert_eq!(submission.answer_for(13), Some(&AnswerValue::Marked(true)));

    let result = AutoGrader::new(&key).grade(&submission).expect("grade");

    assert_eq!(result.incorrect_questions(), vec![6, 12, 19, 24]);
    assert_eq!(result.total_score, 80.5);
    assert_eq!(result.missing, vec![6]);
    assert_eq!(result.ignored, vec![999]);
}
