#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Converts raw scores into normative measures: percentile, relative grade
//! bands and T-scores, assuming normally distributed population scores.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{GRADE5_CUTOFFS, GRADE9_CUTOFFS, TSCORE_DISPLAY_MAX, TSCORE_DISPLAY_MIN},
    error::{DiagError, Result},
};

/// Population parameters of a score distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Norm {
    /// Average raw score.
    pub mean:    f64,
    /// Standard deviation of the raw score.
    pub std_dev: f64,
}

impl Norm {
    /// Creates a norm without validating it.
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Rejects non-finite values and non-positive standard deviations.
    pub fn validate(&self) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(DiagError::invalid("mean", self.mean));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(DiagError::invalid("stdDev", self.std_dev));
        }
        Ok(())
    }

    /// Standard score of `raw` under this norm.
    pub fn z(&self, raw: f64) -> Result<f64> {
        self.validate()?;
        if !raw.is_finite() {
            return Err(DiagError::invalid("rawScore", raw));
        }
        Ok((raw - self.mean) / self.std_dev)
    }
}

/// All normative measures for one raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMeasures {
    /// The raw score measured.
    pub raw:            f64,
    /// Share of the population at or below `raw`, 0–100.
    pub percentile:     f64,
    /// `100 - percentile`, the figure grade bands are cut on.
    pub top_percent:    f64,
    /// 9-band relative grade, 1 is best.
    pub grade9:         u8,
    /// 5-band relative grade, 1 is best.
    pub grade5:         u8,
    /// Unclamped T-score.
    pub tscore:         f64,
    /// T-score clamped for bar-chart scaling.
    pub display_tscore: f64,
}

/// Standard normal cumulative distribution function.
///
/// Abramowitz & Stegun 26.2.17, absolute error below 7.5e-8.
pub fn normal_cdf(z: f64) -> f64 {
    const P: f64 = 0.231_641_9;
    const B: [f64; 5] = [
        0.319_381_530,
        -0.356_563_782,
        1.781_477_937,
        -1.821_255_978,
        1.330_274_429,
    ];

    if z.is_nan() {
        return f64::NAN;
    }

    let x = z.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = t * (B[0] + t * (B[1] + t * (B[2] + t * (B[3] + t * B[4]))));
    let density = (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt();
    let upper_tail = density * poly;

    if z >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

/// Percentile of `raw` in a normal population with the given parameters.
pub fn percentile(raw: f64, mean: f64, std_dev: f64) -> Result<f64> {
    let z = Norm::new(mean, std_dev).z(raw)?;
    Ok((normal_cdf(z) * 100.0).clamp(0.0, 100.0))
}

/// First band whose cumulative cutoff covers `top`, counting from 1.
fn band(percentile: f64, cutoffs: &[f64]) -> u8 {
    let top = 100.0 - percentile.clamp(0.0, 100.0);
    let index = cutoffs
        .iter()
        .position(|&cutoff| top <= cutoff)
        .unwrap_or(cutoffs.len());
    (index + 1) as u8
}

/// 9-band relative grade for a percentile. Boundaries go to the better band.
pub fn grade9(percentile: f64) -> u8 {
    band(percentile, &GRADE9_CUTOFFS)
}

/// 5-band relative grade for a percentile. Boundaries go to the better band.
pub fn grade5(percentile: f64) -> u8 {
    band(percentile, &GRADE5_CUTOFFS)
}

/// T-score, `50 + 10z`. Not clamped.
pub fn tscore(raw: f64, mean: f64, std_dev: f64) -> Result<f64> {
    let z = Norm::new(mean, std_dev).z(raw)?;
    Ok(50.0 + 10.0 * z)
}

/// Clamps a T-score into the range drawn on reports.
pub fn display_tscore(tscore: f64) -> f64 {
    tscore.clamp(TSCORE_DISPLAY_MIN, TSCORE_DISPLAY_MAX)
}

/// Computes every measure for `raw` under `norm`.
pub fn measure(raw: f64, norm: &Norm) -> Result<ScoreMeasures> {
    let percentile = percentile(raw, norm.mean, norm.std_dev)?;
    let tscore = tscore(raw, norm.mean, norm.std_dev)?;

    Ok(ScoreMeasures {
        raw,
        percentile,
        top_percent: 100.0 - percentile,
        grade9: grade9(percentile),
        grade5: grade5(percentile),
        tscore,
        display_tscore: display_tscore(tscore),
    })
}
