#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Cumulative "top percent" cutoffs for the 9-band relative grade.
///
/// Band `i + 1` covers everyone whose top percentage is at most
/// `GRADE9_CUTOFFS[i]`; anything beyond the last cutoff is band 9.
pub const GRADE9_CUTOFFS: [f64; 8] = [4.0, 11.0, 23.0, 40.0, 60.0, 77.0, 89.0, 96.0];

/// Cumulative "top percent" cutoffs for the 5-band relative grade.
pub const GRADE5_CUTOFFS: [f64; 4] = [10.0, 34.0, 66.0, 90.0];

/// Lowest T-score drawn on a report's bar chart.
pub const TSCORE_DISPLAY_MIN: f64 = 10.0;

/// Highest T-score drawn on a report's bar chart.
pub const TSCORE_DISPLAY_MAX: f64 = 90.0;

/// Absolute tolerance for numeric answer comparison.
pub const NUMERIC_TOLERANCE: f64 = 1e-6;

/// Environment variable naming a JSON file with norm overrides.
pub const NORMS_ENV: &str = "MATHDIAG_NORMS";

/// Environment variable naming a JSON file with report commentary.
pub const COMMENTARY_ENV: &str = "MATHDIAG_COMMENTARY";

/// Environment variable with the log level for the command line tool.
pub const LOG_ENV: &str = "MATHDIAG_LOG";
