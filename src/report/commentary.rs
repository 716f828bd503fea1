#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::paper::tables::{FUNCTIONS, GEOMETRY};

/// A comment that applies from `threshold` upwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Lowest value the comment applies to.
    pub threshold: f64,
    /// The comment itself.
    pub text:      String,
}

impl Comment {
    /// Creates a comment.
    pub fn new(threshold: f64, text: impl Into<String>) -> Self {
        Self {
            threshold,
            text: text.into(),
        }
    }
}

/// Picks the comment with the highest threshold not above `value`.
///
/// When `value` is below every threshold the lowest entry is used, so a
/// non-empty list always yields a comment. Equal thresholds resolve to the
/// one declared first.
pub fn floor_lookup(entries: &[Comment], value: f64) -> Option<&Comment> {
    let mut best: Option<&Comment> = None;
    for entry in entries {
        if entry.threshold <= value && best.is_none_or(|b| entry.threshold > b.threshold) {
            best = Some(entry);
        }
    }

    best.or_else(|| {
        entries
            .iter()
            .min_by(|a, b| a.threshold.total_cmp(&b.threshold))
    })
}

/// Narrative comments for reports.
///
/// The overall comment is keyed on the total T-score; area comments are keyed
/// on the area's score rate (0–100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentaryTable {
    /// Comments keyed on the total T-score.
    #[serde(default)]
    pub overall:       Vec<Comment>,
    /// Area-specific comments keyed on score rate.
    #[serde(default)]
    pub areas:         BTreeMap<String, Vec<Comment>>,
    /// Comments for areas without their own list.
    #[serde(default)]
    pub fallback_area: Vec<Comment>,
}

impl CommentaryTable {
    /// Comment for the whole paper.
    pub fn overall_comment(&self, tscore: f64) -> Option<&str> {
        floor_lookup(&self.overall, tscore).map(|c| c.text.as_str())
    }

    /// Comment for one area, falling back to the generic list.
    pub fn area_comment(&self, area: &str, rate: f64) -> Option<&str> {
        let entries = self
            .areas
            .get(area)
            .filter(|entries| !entries.is_empty())
            .unwrap_or(&self.fallback_area);
        floor_lookup(entries, rate).map(|c| c.text.as_str())
    }
}

impl Default for CommentaryTable {
    fn default() -> Self {
        let overall = vec![
            Comment::new(0.0, "기초 개념부터 다시 정리해야 합니다. 교과서 예제 중심으로 학습 계획을 세우세요."),
            Comment::new(40.0, "기본 개념은 갖추었지만 응용 문제에서 실수가 잦습니다. 유형별 반복 학습을 권장합니다."),
            Comment::new(50.0, "평균 수준의 실력입니다. 취약 영역을 집중 보완하면 상위권으로 올라설 수 있습니다."),
            Comment::new(60.0, "상위권 실력입니다. 고난도 문항 풀이 경험을 늘려 완성도를 높이세요."),
            Comment::new(70.0, "최상위권 실력입니다. 심화 및 선행 학습으로 역량을 넓혀 보세요."),
        ];

        let fallback_area = vec![
            Comment::new(0.0, "기본 개념 이해가 부족합니다. 개념 정리부터 다시 시작하세요."),
            Comment::new(40.0, "개념은 이해했으나 문제에 적용하는 연습이 더 필요합니다."),
            Comment::new(60.0, "안정적인 수준입니다. 고난도 문항에 도전해 보세요."),
            Comment::new(80.0, "우수한 수준입니다. 지금의 학습 방식을 유지하세요."),
        ];

        let areas = BTreeMap::from([
            (
                FUNCTIONS.to_string(),
                vec![
                    Comment::new(0.0, "그래프와 식을 연결하는 연습이 필요합니다. 좌표평면 읽기부터 복습하세요."),
                    Comment::new(50.0, "함수의 기본 성질은 익혔습니다. 그래프 해석 문제를 꾸준히 풀어 보세요."),
                    Comment::new(80.0, "함수 영역이 강점입니다. 최대·최소 활용 문제로 심화하세요."),
                ],
            ),
            (
                GEOMETRY.to_string(),
                vec![
                    Comment::new(0.0, "도형의 기본 성질을 그림과 함께 다시 정리하세요."),
                    Comment::new(50.0, "도형 성질은 알고 있으나 보조선 활용이 약합니다."),
                    Comment::new(80.0, "기하 영역이 강점입니다. 서술형 증명 문제로 완성도를 높이세요."),
                ],
            ),
        ]);

        Self {
            overall,
            areas,
            fallback_area,
        }
    }
}
