#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Answer keys and the rule that decides whether an answer is correct.
//!
//! Keys are grading data owned by whoever runs the test; they are loaded by
//! the caller and handed to the grader, never compiled in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::submission::AnswerValue;
use crate::{constants::NUMERIC_TOLERANCE, paper::TestVariant};

/// The accepted answer for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedAnswer {
    /// A number, compared with [`NUMERIC_TOLERANCE`].
    Number(f64),
    /// A single accepted string. Numeric strings such as `"3/4"` are compared
    /// as numbers.
    Text(String),
    /// Any of several accepted strings.
    AnyOf(Vec<String>),
}

impl ExpectedAnswer {
    /// Decides whether `value` answers this question correctly.
    ///
    /// `Marked` values were graded by hand and are taken as-is.
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        if let AnswerValue::Marked(correct) = value {
            return *correct;
        }

        match self {
            ExpectedAnswer::Number(expected) => submitted_number(value)
                .is_some_and(|got| (got - expected).abs() <= NUMERIC_TOLERANCE),
            ExpectedAnswer::Text(expected) => text_accepts(expected, value),
            ExpectedAnswer::AnyOf(options) => options.iter().any(|o| text_accepts(o, value)),
        }
    }
}

impl From<f64> for ExpectedAnswer {
    fn from(value: f64) -> Self {
        ExpectedAnswer::Number(value)
    }
}

impl From<&str> for ExpectedAnswer {
    fn from(value: &str) -> Self {
        ExpectedAnswer::Text(value.to_string())
    }
}

/// Correct answers for every question of one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerKey {
    /// Variant the key was written for.
    #[serde(rename = "testType")]
    pub variant: TestVariant,
    /// Accepted answers by question number.
    #[serde(default)]
    pub answers: BTreeMap<u32, ExpectedAnswer>,
}

impl AnswerKey {
    /// Creates an empty key.
    pub fn new(variant: TestVariant) -> Self {
        Self {
            variant,
            answers: BTreeMap::new(),
        }
    }

    /// Adds or replaces the accepted answer for `question`.
    pub fn with(mut self, question: u32, expected: impl Into<ExpectedAnswer>) -> Self {
        self.answers.insert(question, expected.into());
        self
    }

    /// The accepted answer for `question`, if the key has one.
    pub fn expected(&self, question: u32) -> Option<&ExpectedAnswer> {
        self.answers.get(&question)
    }
}

/// Maps circled digits (①–⑳) to their ASCII value, used on multiple choice
/// answer sheets.
fn circled_digit(c: char) -> Option<u32> {
    match c {
        '\u{2460}'..='\u{2473}' => Some(c as u32 - 0x2460 + 1),
        _ => None,
    }
}

/// Canonical text form: no whitespace, lowercase, circled digits spelled out.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        match circled_digit(c) {
            Some(n) => out.push_str(&n.to_string()),
            None => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Parses a decimal (`"0.75"`) or a fraction (`"3/4"`, `"-1/2"`).
pub fn parse_number(text: &str) -> Option<f64> {
    let text = normalize_text(text);
    let value = match text.split_once('/') {
        Some((num, den)) => {
            let den = den.parse::<f64>().ok()?;
            if den == 0.0 {
                return None;
            }
            num.parse::<f64>().ok()? / den
        }
        None => text.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

/// The numeric reading of a submitted value, if it has one.
fn submitted_number(value: &AnswerValue) -> Option<f64> {
    match value {
        AnswerValue::Number(n) => n.is_finite().then_some(*n),
        AnswerValue::Text(t) => parse_number(t),
        AnswerValue::Marked(_) => None,
    }
}

/// Compares against a textual expectation, numerically when it is a number.
fn text_accepts(expected: &str, value: &AnswerValue) -> bool {
    if let Some(expected) = parse_number(expected) {
        return submitted_number(value)
            .is_some_and(|got| (got - expected).abs() <= NUMERIC_TOLERANCE);
    }

    match value {
        AnswerValue::Text(t) => normalize_text(t) == normalize_text(expected),
        AnswerValue::Number(n) => normalize_text(&n.to_string()) == normalize_text(expected),
        AnswerValue::Marked(correct) => *correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circled_digits_and_spacing_are_normalized() {
        assert_eq!(normalize_text(" ③ "), "3");
        assert_eq!(normalize_text("X = 2"), "x=2");
        assert_eq!(normalize_text("⑫"), "12");
    }

    #[test]
    fn fractions_parse_and_zero_denominators_do_not() {
        assert_eq!(parse_number("3/4"), Some(0.75));
        assert_eq!(parse_number("-1/2"), Some(-0.5));
        assert_eq!(parse_number("1/0"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn numeric_expectation_accepts_equivalent_forms() {
        let expected = ExpectedAnswer::Number(0.75);
        assert!(expected.accepts(&AnswerValue::Number(0.75)));
        assert!(expected.accepts(&"3/4".into()));
        assert!(expected.accepts(&" 0.750 ".into()));
        assert!(!expected.accepts(&"0.7".into()));
        assert!(!expected.accepts(&"three quarters".into()));
    }

    #[test]
    fn text_expectation_is_whitespace_and_case_insensitive() {
        let expected = ExpectedAnswer::Text("x=2".into());
        assert!(expected.accepts(&"X = 2".into()));
        assert!(!expected.accepts(&"x=3".into()));

        let choice = ExpectedAnswer::Text("3".into());
        assert!(choice.accepts(&"③".into()));
        assert!(choice.accepts(&AnswerValue::Number(3.0)));
    }

    #[test]
    fn any_of_accepts_each_alternative() {
        let expected = ExpectedAnswer::AnyOf(vec!["a>0".into(), "0<a".into()]);
        assert!(expected.accepts(&"0 < a".into()));
        assert!(expected.accepts(&"A>0".into()));
        assert!(!expected.accepts(&"a<0".into()));
    }

    #[test]
    fn marked_answers_bypass_the_key() {
        let expected = ExpectedAnswer::Number(1.0);
        assert!(expected.accepts(&AnswerValue::Marked(true)));
        assert!(!expected.accepts(&AnswerValue::Marked(false)));
    }
}
