//! Conformance harness for tagtidy.
//!
//! This crate provides:
//! - Fixtures: JSON case sets describing inputs and expected outputs
//! - Execution: dispatch of fixture cases to `tagtidy-core`
//! - Verification: per-case results with diffs, aggregated into summaries
//! - Reports: markdown and JSON conformance reports
//! - Structured logging: JSONL run logs and a SHA-256 artifact index

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod execute;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::{HarnessError, Result};
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
