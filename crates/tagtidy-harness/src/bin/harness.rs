//! CLI entrypoint for the tagtidy conformance harness.

use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use tagtidy_core::Capitalization;
use tagtidy_harness::fixtures::{fixture_files, load_fixture_sets};
use tagtidy_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, StreamKind, now_utc, validate_log_file,
};
use tagtidy_harness::{ConformanceReport, TestRunner, VerificationSummary};

const SUITE: &str = "tagtidy-fixtures";

/// Conformance tooling for tagtidy.
#[derive(Debug, Parser)]
#[command(name = "tagtidy-harness")]
#[command(about = "Fixture-driven conformance harness for tagtidy")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify tagtidy-core against fixture files.
    Verify {
        /// Fixture JSON file or directory of fixture files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a `.json` sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Write a JSONL run log here.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Validate a JSONL run log.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
    /// Write a SHA-256 index of the fixture files.
    ArtifactIndex {
        /// Fixture JSON file or directory of fixture files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output JSON path.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = load_fixture_sets(&fixture)?;
            let runners = [
                TestRunner::new("fixture-verify", Capitalization::Title),
                TestRunner::new("fixture-verify", Capitalization::EveryWord),
            ];

            let started = Instant::now();
            let mut results = Vec::new();
            match log {
                Some(log_path) => {
                    let mut emitter = LogEmitter::to_file(&log_path, SUITE, &run_id())?;
                    emitter.emit(LogLevel::Info, "run_start")?;
                    for set in &fixture_sets {
                        for runner in &runners {
                            results.extend(runner.run_logged(set, &mut emitter)?);
                        }
                    }
                    let duration_ms =
                        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let fixture_refs = fixture_files(&fixture)?
                        .iter()
                        .map(|path| path.display().to_string())
                        .collect();
                    emitter.emit_entry(
                        LogEntry::new("", LogLevel::Info, "run_end")
                            .with_stream(StreamKind::Conformance)
                            .with_duration_ms(duration_ms)
                            .with_artifacts(fixture_refs),
                    )?;
                    emitter.flush()?;
                    eprintln!("Wrote run log to {}", log_path.display());
                }
                None => {
                    for set in &fixture_sets {
                        for runner in &runners {
                            results.extend(runner.run(set));
                        }
                    }
                }
            }

            let report_doc = ConformanceReport {
                title: String::from("tagtidy Conformance Report"),
                policy: String::from("title+every"),
                timestamp: now_utc(),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!(
                    "FAIL {}: expected {:?}, got {:?}",
                    failure.case_name, failure.expected, failure.actual
                );
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            for error in &errors {
                eprintln!("{error}");
            }
            if !errors.is_empty() {
                return Err(format!(
                    "{} invalid field(s) across {lines} line(s) in {}",
                    errors.len(),
                    log.display()
                )
                .into());
            }
            eprintln!("{lines} log line(s) valid");
        }
        Command::ArtifactIndex { fixture, output } => {
            let mut index = ArtifactIndex::new(run_id(), SUITE);
            for file in fixture_files(&fixture)? {
                index.add_file(&file, "fixture")?;
            }
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, index.to_json()?)?;
            eprintln!(
                "Indexed {} artifact(s) to {}",
                index.artifacts.len(),
                output.display()
            );
        }
    }

    Ok(())
}

fn run_id() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("run-{secs}")
}
