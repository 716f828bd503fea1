#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Population norms per test variant and the settings bundle handed to the
//! report pipeline.
//!
//! Everything here is plain data. The command line tool builds a
//! [`Settings`] once from the environment and passes it down; the library
//! never reads the environment on its own.

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    constants::{COMMENTARY_ENV, NORMS_ENV},
    error::DiagError,
    grade::Norm,
    paper::{
        TestVariant,
        tables::{FUNCTIONS, GEOMETRY, LETTERS_AND_EXPRESSIONS, NUMBER_AND_OPERATION},
        test_paper,
    },
    report::CommentaryTable,
};

/// Norms for one variant: the whole paper, plus optional per-area norms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNorms {
    /// Distribution of the total raw score.
    pub overall: Norm,
    /// Distribution of area raw scores, where calibrated.
    #[serde(default)]
    pub areas:   BTreeMap<String, Norm>,
}

impl VariantNorms {
    /// Norms with no area calibration.
    pub fn overall_only(overall: Norm) -> Self {
        Self {
            overall,
            areas: BTreeMap::new(),
        }
    }

    /// Adds an area norm.
    pub fn with_area(mut self, area: impl Into<String>, norm: Norm) -> Self {
        self.areas.insert(area.into(), norm);
        self
    }

    /// The calibrated norm for `area`, if there is one.
    pub fn area(&self, area: &str) -> Option<&Norm> {
        self.areas.get(area)
    }
}

/// Norms for every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormTable(BTreeMap<TestVariant, VariantNorms>);

impl Default for NormTable {
    /// Hand-calibrated norms from past test sittings.
    fn default() -> Self {
        let mono = VariantNorms::overall_only(Norm::new(45.0, 22.0))
            .with_area(NUMBER_AND_OPERATION, Norm::new(12.0, 5.0))
            .with_area(LETTERS_AND_EXPRESSIONS, Norm::new(12.5, 6.5))
            .with_area(FUNCTIONS, Norm::new(10.0, 6.0))
            .with_area(GEOMETRY, Norm::new(10.5, 6.5));

        Self(BTreeMap::from([
            (TestVariant::Mono, mono),
            (TestVariant::Di, VariantNorms::overall_only(Norm::new(42.0, 21.0))),
            (TestVariant::Tri, VariantNorms::overall_only(Norm::new(38.0, 20.0))),
        ]))
    }
}

impl NormTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Norms for `variant`.
    pub fn get(&self, variant: TestVariant) -> Result<&VariantNorms, DiagError> {
        self.0
            .get(&variant)
            .ok_or_else(|| DiagError::UnknownVariant(variant.to_string()))
    }

    /// Sets or replaces the norms for `variant`.
    pub fn insert(&mut self, variant: TestVariant, norms: VariantNorms) {
        self.0.insert(variant, norms);
    }

    /// Replaces whole variants with the ones from `overrides`.
    pub fn merge(&mut self, overrides: NormTable) {
        self.0.extend(overrides.0);
    }

    /// Iterates variants in order.
    pub fn iter(&self) -> impl Iterator<Item = (&TestVariant, &VariantNorms)> {
        self.0.iter()
    }

    /// Area norms whose label is not an area of their variant's paper.
    pub fn unmatched_areas(&self) -> Vec<(TestVariant, &str)> {
        self.0
            .iter()
            .flat_map(|(variant, norms)| {
                let paper = test_paper(*variant);
                norms
                    .areas
                    .keys()
                    .filter(move |area| paper.area_score(area).is_none())
                    .map(move |area| (*variant, area.as_str()))
            })
            .collect()
    }

    /// Checks every norm in the table.
    pub fn validate(&self) -> Result<(), DiagError> {
        for norms in self.0.values() {
            norms.overall.validate()?;
            for norm in norms.areas.values() {
                norm.validate()?;
            }
        }
        Ok(())
    }
}

/// Static inputs of the report pipeline.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Population norms.
    pub norms:      NormTable,
    /// Commentary attached to reports.
    pub commentary: CommentaryTable,
}

impl Settings {
    /// Built-in norms and commentary, with overrides from the files named by
    /// `MATHDIAG_NORMS` and `MATHDIAG_COMMENTARY` when those are set.
    pub fn from_env() -> Result<Self> {
        let norms = env_path(NORMS_ENV);
        let commentary = env_path(COMMENTARY_ENV);
        Self::load(norms.as_deref().map(Path::new), commentary.as_deref().map(Path::new))
    }

    /// Built-in norms and commentary, with the norm overrides merged in and
    /// the commentary replaced when files are given.
    pub fn load(norms_path: Option<&Path>, commentary_path: Option<&Path>) -> Result<Self> {
        let mut norms = NormTable::default();
        if let Some(path) = norms_path {
            let overrides: NormTable = read_json(path)?;
            tracing::info!("Loaded norm overrides from {}", path.display());
            norms.merge(overrides);
        }
        norms
            .validate()
            .context("Norm table contains an unusable value")?;
        for (variant, area) in norms.unmatched_areas() {
            tracing::warn!(
                "Norm for area `{}` matches no area on the {} paper and will not be used",
                area,
                variant
            );
        }

        let commentary = match commentary_path {
            Some(path) => {
                let table: CommentaryTable = read_json(path)?;
                tracing::info!("Loaded report commentary from {}", path.display());
                table
            }
            None => CommentaryTable::default(),
        };

        Ok(Self { norms, commentary })
    }
}

/// Reads a non-empty environment variable.
fn env_path(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Could not parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_variant_and_validate() {
        let table = NormTable::default();
        for variant in TestVariant::ALL {
            assert!(table.get(variant).is_ok(), "{variant} has no norms");
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn merge_replaces_whole_variants() {
        let mut table = NormTable::default();
        let overrides: NormTable =
            serde_json::from_str(r#"{"MONO":{"overall":{"mean":50.0,"stdDev":20.0}}}"#)
                .expect("parse overrides");

        table.merge(overrides);
        let mono = table.get(TestVariant::Mono).expect("mono");
        assert_eq!(mono.overall, Norm::new(50.0, 20.0));
        assert!(mono.areas.is_empty());
        assert_eq!(
            table.get(TestVariant::Di).expect("di").overall,
            Norm::new(42.0, 21.0)
        );
    }

    #[test]
    fn zero_std_dev_fails_validation() {
        let mut table = NormTable::empty();
        table.insert(TestVariant::Tri, VariantNorms::overall_only(Norm::new(40.0, 0.0)));
        assert_eq!(table.validate(), Err(DiagError::invalid("stdDev", 0.0)));
    }

    #[test]
    fn missing_variant_is_unknown() {
        let table = NormTable::empty();
        assert_eq!(
            table.get(TestVariant::Di).unwrap_err(),
            DiagError::UnknownVariant("DI".into())
        );
    }

    #[test]
    fn area_norms_outside_the_paper_are_reported() {
        let mut table = NormTable::default();
        assert!(table.unmatched_areas().is_empty());

        table.insert(
            TestVariant::Di,
            VariantNorms::overall_only(Norm::new(42.0, 21.0))
                .with_area(FUNCTIONS, Norm::new(10.0, 5.0))
                .with_area("삼각함수", Norm::new(8.0, 4.0)),
        );
        assert_eq!(table.unmatched_areas(), vec![(TestVariant::Di, "삼각함수")]);
    }
}
