#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # mathdiag
//!
//! Command line front end for the diagnostic grader.
//!
//! * `mathdiag paper MONO` prints the score table of a test form.
//! * `mathdiag grade submission.json --key key.json` grades a submission and
//!   prints the report, or its JSON with `--json`.
//! * `mathdiag norms` prints the population norms in use.
//!
//! Norms and commentary can be overridden with JSON files named by
//! `MATHDIAG_NORMS` and `MATHDIAG_COMMENTARY`; `MATHDIAG_LOG` sets the log
//! level. A `.env` file in the working directory is honoured.

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use mathdiag::{
    Settings,
    config::read_json,
    constants::LOG_ENV,
    generate_report,
    grade::{AnswerKey, StudentSubmission},
    paper::test_paper_by_name,
    report::{ReportData, render_norms, render_paper, render_report},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Print the score table of a variant
    Paper(String),
    /// Grade a submission against an answer key
    Grade {
        /// Path to the answer key JSON
        key:        String,
        /// Print the report as JSON instead of tables
        json:       bool,
        /// Path to the submission JSON
        submission: String,
    },
    /// Print the norms in use
    Norms,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses a variant code
    fn v() -> impl Parser<String> {
        positional("VARIANT").help("Test variant: MONO, DI or TRI")
    }

    /// parses the submission path
    fn s() -> impl Parser<String> {
        positional("SUBMISSION").help("Path to a submission JSON file")
    }

    /// parses the answer key path
    fn k() -> impl Parser<String> {
        long("key")
            .short('k')
            .help("Path to the answer key JSON file")
            .argument("KEY")
    }

    let paper = construct!(Cmd::Paper(v()))
        .to_options()
        .command("paper")
        .help("Print the score table of a test variant");

    let grade = {
        let key = k();
        let json = long("json").help("Print the report as JSON").switch();
        let submission = s();
        construct!(Cmd::Grade {
            key,
            json,
            submission
        })
    }
    .to_options()
    .command("grade")
    .help("Grade a submission and print its report");

    let norms = pure(Cmd::Norms)
        .to_options()
        .command("norms")
        .help("Print the population norms in use");

    let cmd = construct!([paper, grade, norms]);

    cmd.to_options()
        .descr("Diagnostic test grader and report generator")
        .run()
}

/// Log level from `MATHDIAG_LOG`, defaulting to INFO.
fn log_level() -> Level {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

/// One-line summary on stderr, colored by 9-band grade.
fn print_summary(report: &ReportData) {
    let line = format!(
        "{} {}, grade {} (top {:.1}%)",
        report.student.name, report.grading, report.total.grade9, report.total.top_percent
    );
    let line = match report.total.grade9 {
        1..=3 => line.as_str().green(),
        4..=6 => line.as_str().yellow(),
        _ => line.as_str().red(),
    };
    eprintln!("{line}");
}

/// Runs a parsed command.
fn run(cmd: Cmd) -> Result<()> {
    match cmd {
        Cmd::Paper(variant) => {
            let paper = test_paper_by_name(&variant)?;
            println!("{}", render_paper(paper));
        }
        Cmd::Grade {
            key,
            json,
            submission,
        } => {
            let settings = Settings::from_env()?;
            let submission: StudentSubmission = read_json(&submission)?;
            let key: AnswerKey = read_json(&key)?;

            let report = generate_report(&submission, &key, &settings)
                .context("Could not generate the report")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_report(&report));
                print_summary(&report);
            }
        }
        Cmd::Norms => {
            let settings = Settings::from_env()?;
            println!("{}", render_norms(&settings.norms));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    if let Err(e) = run(cmd) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
