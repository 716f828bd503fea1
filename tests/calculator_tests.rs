#[path = "grading_support.rs"]
mod grading_support;

use grading_support::{assert_close, blank, numbered_key, perfect};
use mathdiag::{
    DiagError,
    config::NormTable,
    grade::{AutoGrader, Norm, grade5, grade9, measure, percentile, tscore},
    paper::TestVariant,
};

fn mono_norm() -> Norm {
    NormTable::default()
        .get(TestVariant::Mono)
        .expect("built-in MONO norms")
        .overall
}

#[test]
fn mean_score_sits_at_the_median() {
    let m = measure(45.0, &mono_norm()).expect("measure");

    assert_close(m.percentile, 50.0, 1e-5);
    assert_close(m.top_percent, 50.0, 1e-5);
    assert_eq!(m.tscore, 50.0);
    assert_eq!(m.grade9, 5);
    assert_eq!(m.grade5, 3);
}

#[test]
fn one_deviation_above_the_mean() {
    let m = measure(67.0, &mono_norm()).expect("measure");

    assert_eq!(m.tscore, 60.0);
    assert_close(m.percentile, 84.134_474_6, 1e-5);
    assert_eq!(m.grade9, 3);
    assert_eq!(m.grade5, 2);
}

#[test]
fn blank_paper_lands_in_the_bottom_bands() {
    let key = numbered_key(TestVariant::Mono);
    let grading = AutoGrader::new(&key).grade(&blank(TestVariant::Mono)).expect("grade");
    let m = measure(grading.total_score, &mono_norm()).expect("measure");

    assert!(m.percentile < 3.0, "percentile {}", m.percentile);
    assert_eq!(m.grade9, 9);
    assert_eq!(m.grade5, 5);
    assert!(m.tscore < 30.0);
}

#[test]
fn perfect_paper_lands_in_the_top_bands() {
    let key = numbered_key(TestVariant::Mono);
    let grading = AutoGrader::new(&key).grade(&perfect(TestVariant::Mono)).expect("grade");
    let m = measure(grading.total_score, &mono_norm()).expect("measure");

    assert!(m.percentile > 99.0, "percentile {}", m.percentile);
    assert_close(m.percentile, 99.379_033_5, 1e-5);
    assert_eq!(m.grade9, 1);
    assert_eq!(m.grade5, 1);
    assert_eq!(m.tscore, 75.0);
}

#[test]
fn every_band_is_reachable() {
    let bands: Vec<u8> = [99.0, 92.0, 85.0, 70.0, 50.0, 30.0, 15.0, 6.0, 1.0]
        .into_iter()
        .map(grade9)
        .collect();
    assert_eq!(bands, (1..=9).collect::<Vec<u8>>());

    let bands: Vec<u8> = [95.0, 80.0, 50.0, 20.0, 5.0].into_iter().map(grade5).collect();
    assert_eq!(bands, (1..=5).collect::<Vec<u8>>());
}

#[test]
fn display_tscore_is_clamped_but_decisions_use_raw() {
    let norm = Norm::new(10.0, 2.0);
    let high = measure(30.0, &norm).expect("measure");
    let low = measure(0.0, &norm).expect("measure");

    assert_eq!(high.tscore, 150.0);
    assert_eq!(high.display_tscore, 90.0);
    assert_eq!(low.tscore, 0.0);
    assert_eq!(low.display_tscore, 10.0);
}

#[test]
fn degenerate_parameters_are_errors() {
    assert_eq!(
        percentile(10.0, 45.0, 0.0),
        Err(DiagError::InvalidParameter {
            name:  "stdDev".to_string(),
            value: 0.0,
        })
    );
    assert!(matches!(
        tscore(10.0, f64::INFINITY, 10.0),
        Err(DiagError::InvalidParameter { .. })
    ));
    assert!(matches!(
        measure(f64::NAN, &mono_norm()),
        Err(DiagError::InvalidParameter { .. })
    ));
}
