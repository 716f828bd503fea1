#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::paper::TestVariant;

/// A value written on the answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Graded on site; only correctness is recorded.
    Marked(bool),
    /// A numeric answer.
    Number(f64),
    /// Anything else the student wrote.
    Text(String),
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Marked(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// One answer of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAnswer {
    /// Question the answer is for.
    #[serde(rename = "questionNumber")]
    pub question: u32,
    /// What the student submitted.
    pub value:    AnswerValue,
}

impl StudentAnswer {
    /// Creates an answer for `question`.
    pub fn new(question: u32, value: impl Into<AnswerValue>) -> Self {
        Self {
            question,
            value: value.into(),
        }
    }
}

/// Identity fields collected by the intake form. Everything except the name
/// is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    /// Student name.
    #[builder(setter(into))]
    pub name:    String,
    /// Phone number or other contact.
    #[builder(default, setter(strip_option, into))]
    pub contact: Option<String>,
    /// School name.
    #[builder(default, setter(strip_option, into))]
    pub school:  Option<String>,
    /// School year, e.g. `"중2"`.
    #[builder(default, setter(strip_option, into))]
    pub grade:   Option<String>,
    /// Self-reported level.
    #[builder(default, setter(strip_option, into))]
    pub level:   Option<String>,
}

/// A completed answer sheet for one test variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubmission {
    /// Identifier assigned by the intake layer, if any.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:      Option<String>,
    /// Which paper was taken.
    #[serde(rename = "testType")]
    pub variant: TestVariant,
    /// Who took it.
    #[builder(default)]
    #[serde(default)]
    pub student: StudentProfile,
    /// Answers in any order. Question numbers may be missing or repeated.
    #[builder(default, setter(into))]
    #[serde(default)]
    pub answers: Vec<StudentAnswer>,
}

impl StudentSubmission {
    /// Answers keyed by question number. When a question was answered more
    /// than once, the last answer wins.
    pub fn answer_map(&self) -> BTreeMap<u32, &AnswerValue> {
        self.answers
            .iter()
            .map(|a| (a.question, &a.value))
            .collect()
    }

    /// The effective answer for `question`, if any.
    pub fn answer_for(&self, question: u32) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .rev()
            .find(|a| a.question == question)
            .map(|a| &a.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_answers_overwrite_earlier_ones() {
        let submission = StudentSubmission::builder()
            .variant(TestVariant::Mono)
            .answers(vec![StudentAnswer::new(3, 1), StudentAnswer::new(3, "7")])
            .build();

        assert_eq!(submission.answer_for(3), Some(&AnswerValue::Text("7".into())));
        assert_eq!(submission.answer_map()[&3], &AnswerValue::Text("7".into()));
        assert_eq!(submission.answer_for(4), None);
    }

    #[test]
    fn untagged_values_deserialize_by_shape() {
        let answers: Vec<StudentAnswer> = serde_json::from_str(
            r#"[{"questionNumber":1,"value":true},
                {"questionNumber":2,"value":2.5},
                {"questionNumber":3,"value":"x=2"}]"#,
        )
        .expect("parse answers");

        assert_eq!(answers[0].value, AnswerValue::Marked(true));
        assert_eq!(answers[1].value, AnswerValue::Number(2.5));
        assert_eq!(answers[2].value, AnswerValue::Text("x=2".into()));
    }
}
