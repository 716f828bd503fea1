#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::assemble::ReportData;
use crate::{config::NormTable, paper::TestPaper};

/// Wrap width for free-text columns.
const TEXT_WIDTH: usize = 36;

#[derive(Tabled)]
/// One question of a paper listing.
struct QuestionRow {
    #[tabled(rename = "No.")]
    /// Question number.
    number:     u32,
    #[tabled(rename = "Area")]
    /// Area label.
    area:       &'static str,
    #[tabled(rename = "Difficulty")]
    /// Difficulty label.
    difficulty: &'static str,
    #[tabled(rename = "Score")]
    /// Points.
    score:      String,
    #[tabled(rename = "Content")]
    /// What the question covers.
    content:    &'static str,
}

#[derive(Tabled)]
/// Label/value pair used for summary tables.
struct FieldRow {
    #[tabled(rename = "Field")]
    /// Label.
    field: &'static str,
    #[tabled(rename = "Value")]
    /// Value.
    value: String,
}

#[derive(Tabled)]
/// One area section of a report.
struct AreaRow {
    #[tabled(rename = "Area")]
    /// Area label.
    area:       String,
    #[tabled(rename = "Score")]
    /// Earned over available points.
    score:      String,
    #[tabled(rename = "Rate")]
    /// Score rate.
    rate:       String,
    #[tabled(rename = "T-score")]
    /// T-score, with the bar-chart value when it was clamped.
    tscore:     String,
    #[tabled(rename = "Percentile")]
    /// Percentile.
    percentile: String,
    #[tabled(rename = "Comment")]
    /// Narrative comment.
    comment:    String,
}

#[derive(Tabled)]
/// One difficulty level of a report.
struct DifficultyRow {
    #[tabled(rename = "Difficulty")]
    /// Level label.
    difficulty: &'static str,
    #[tabled(rename = "Correct")]
    /// Correct over total questions.
    correct:    String,
    #[tabled(rename = "Rate")]
    /// Correct rate.
    rate:       String,
    #[tabled(rename = "Score")]
    /// Earned over available points.
    score:      String,
}

#[derive(Tabled)]
/// One question of a graded paper.
struct ResultRow {
    #[tabled(rename = "No.")]
    /// Question number.
    number:     u32,
    #[tabled(rename = "Area")]
    /// Area label.
    area:       String,
    #[tabled(rename = "Difficulty")]
    /// Difficulty label.
    difficulty: &'static str,
    #[tabled(rename = "O/X")]
    /// Correctness mark.
    mark:       &'static str,
    #[tabled(rename = "Points")]
    /// Earned over available points.
    points:     String,
}

#[derive(Tabled)]
/// One norm entry.
struct NormRow {
    #[tabled(rename = "Variant")]
    /// Variant code.
    variant: String,
    #[tabled(rename = "Scope")]
    /// `전체` or an area label.
    scope:   String,
    #[tabled(rename = "Mean")]
    /// Mean raw score.
    mean:    String,
    #[tabled(rename = "Std. dev.")]
    /// Standard deviation.
    std_dev: String,
}

/// Applies the shared look: centered header and footer, wrapped cells.
fn styled(mut table: Table, header: String, footer: Option<String>) -> String {
    table.with(Panel::header(header));
    if let Some(footer) = footer {
        table.with(Panel::footer(footer));
        table.with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        );
    }
    table
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(TEXT_WIDTH).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders the rubric of a paper.
pub fn render_paper(paper: &TestPaper) -> String {
    let rows = paper.questions.iter().map(|q| QuestionRow {
        number:     q.number,
        area:       q.area,
        difficulty: q.difficulty.label(),
        score:      format!("{:.1}", q.score),
        content:    q.content,
    });

    let areas = paper
        .area_scores
        .iter()
        .map(|a| format!("{} {:.1}", a.area, a.score))
        .join(" · ");

    styled(
        Table::new(rows),
        format!(
            "{} score table: {} questions, {:.1} points",
            paper.variant, paper.total_questions, paper.total_score
        ),
        Some(areas),
    )
}

/// Renders a norm table.
pub fn render_norms(norms: &NormTable) -> String {
    let rows = norms.iter().flat_map(|(variant, n)| {
        std::iter::once(NormRow {
            variant: variant.to_string(),
            scope:   "전체".to_string(),
            mean:    format!("{:.1}", n.overall.mean),
            std_dev: format!("{:.1}", n.overall.std_dev),
        })
        .chain(n.areas.iter().map(move |(area, norm)| NormRow {
            variant: variant.to_string(),
            scope:   area.clone(),
            mean:    format!("{:.1}", norm.mean),
            std_dev: format!("{:.1}", norm.std_dev),
        }))
    });

    styled(Table::new(rows), "Population norms".to_string(), None)
}

/// Renders a full report: summary, areas, difficulty levels and questions.
pub fn render_report(report: &ReportData) -> String {
    let total = &report.total;
    let grading = &report.grading;

    let mut summary = vec![
        FieldRow {
            field: "Student",
            value: report.student.name.clone(),
        },
        FieldRow {
            field: "Test",
            value: report.variant.to_string(),
        },
        FieldRow {
            field: "Score",
            value: format!("{:.1} / {:.1}", grading.total_score, grading.max_score),
        },
        FieldRow {
            field: "Percentile",
            value: format!("{:.1} (top {:.1}%)", total.percentile, total.top_percent),
        },
        FieldRow {
            field: "Grade (9 / 5)",
            value: format!("{} / {}", total.grade9, total.grade5),
        },
        FieldRow {
            field: "T-score",
            value: format!("{:.1}", total.tscore),
        },
    ];
    if let Some(school) = &report.student.school {
        summary.insert(1, FieldRow {
            field: "School",
            value: school.clone(),
        });
    }

    let areas = report.areas.iter().map(|a| AreaRow {
        area:       a.area.clone(),
        score:      format!("{:.1} / {:.1}", a.earned_score, a.total_score),
        rate:       format!("{:.0}%", a.rate),
        tscore:     if a.measures.tscore == a.measures.display_tscore {
            format!("{:.1}", a.measures.tscore)
        } else {
            format!("{:.1} ({:.0})", a.measures.tscore, a.measures.display_tscore)
        },
        percentile: format!("{:.1}", a.measures.percentile),
        comment:    a.comment.clone().unwrap_or_default(),
    });

    let difficulty = report.difficulty_results().iter().map(|d| DifficultyRow {
        difficulty: d.difficulty.label(),
        correct:    format!("{} / {}", d.correct_count, d.total_count),
        rate:       format!("{:.0}%", d.correct_rate),
        score:      format!("{:.1} / {:.1}", d.earned_score, d.total_score),
    });

    let questions = grading.question_results.iter().map(|q| ResultRow {
        number:     q.number,
        area:       q.area.clone(),
        difficulty: q.difficulty.label(),
        mark:       if q.is_correct { "O" } else { "X" },
        points:     format!("{:.1} / {:.1}", q.earned_score, q.score),
    });

    let incorrect = report.incorrect_questions();
    let review = if incorrect.is_empty() {
        "All questions correct".to_string()
    } else {
        format!("Review: {}", incorrect.iter().join(", "))
    };

    [
        styled(
            Table::new(summary),
            "Diagnostic Report".to_string(),
            report.overall_comment.clone(),
        ),
        styled(Table::new(areas), "By Area".to_string(), None),
        styled(Table::new(difficulty), "By Difficulty".to_string(), None),
        styled(Table::new(questions), "By Question".to_string(), Some(review)),
    ]
    .join("\n")
}
