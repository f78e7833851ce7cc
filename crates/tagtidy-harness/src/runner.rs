//! Test execution engine.

use std::io::{self, Write};
use std::time::Instant;

use tagtidy_core::Capitalization;

use crate::diff;
use crate::execute::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::VerificationResult;

/// Runs fixture sets under one capitalization policy.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Policy cases are executed under.
    pub policy: Capitalization,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>, policy: Capitalization) -> Self {
        Self {
            campaign: campaign.into(),
            policy,
        }
    }

    /// Run every case of `fixture_set` that applies to this runner's policy.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.cases(fixture_set)
            .map(|case| self.execute_case(case).result)
            .collect()
    }

    /// Like [`TestRunner::run`], also emitting one log entry per case.
    pub fn run_logged<W: Write>(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter<W>,
    ) -> io::Result<Vec<VerificationResult>> {
        let mut results = Vec::new();
        for case in self.cases(fixture_set) {
            let CaseRun {
                result,
                latency_ns,
                executed,
            } = self.execute_case(case);
            let (level, outcome) = match (executed, result.passed) {
                (false, _) => (LogLevel::Warn, Outcome::Error),
                (true, true) => (LogLevel::Info, Outcome::Pass),
                (true, false) => (LogLevel::Error, Outcome::Fail),
            };
            let mut details = serde_json::json!({
                "campaign": self.campaign,
                "case": case.name,
                "property": case.property,
            });
            if !result.passed {
                details["expected"] = result.expected.clone().into();
                details["actual"] = result.actual.clone().into();
            }
            let entry = LogEntry::new("", level, "fixture_case")
                .with_stream(StreamKind::Conformance)
                .with_policy(self.policy.as_str())
                .with_api(&fixture_set.family, &case.function)
                .with_outcome(outcome)
                .with_latency_ns(latency_ns)
                .with_details(details);
            log.emit_entry(entry)?;
            results.push(result);
        }
        Ok(results)
    }

    fn cases<'a>(&self, fixture_set: &'a FixtureSet) -> impl Iterator<Item = &'a FixtureCase> {
        let policy = self.policy;
        fixture_set
            .cases
            .iter()
            .filter(move |case| policy_matches(policy, &case.policy))
    }

    fn execute_case(&self, case: &FixtureCase) -> CaseRun {
        let started = Instant::now();
        let execution = execute_fixture_case(&case.function, &case.inputs, self.policy);
        let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

        let executed = execution.is_ok();
        let actual = match execution {
            Ok(output) => output,
            Err(err) => format!("unsupported: {err}"),
        };
        let passed = actual == case.expected_output;
        let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));
        let result = VerificationResult {
            case_name: case.name.clone(),
            property: case.property.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            diff,
        };
        CaseRun {
            result,
            latency_ns,
            executed,
        }
    }
}

struct CaseRun {
    result: VerificationResult,
    latency_ns: u64,
    /// False when the case never reached tagtidy-core.
    executed: bool,
}

fn policy_matches(active: Capitalization, case_policy: &str) -> bool {
    let case = case_policy.trim().to_ascii_lowercase();
    case == "both" || Capitalization::from_str_loose(&case) == active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured_log::validate_log_text;

    fn capitals_fixture() -> FixtureSet {
        FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"text/capitals",
                "captured_at":"2026-10-01T00:00:00Z",
                "cases":[
                    {"name":"title_connectors","function":"fix_capitals","property":"connector words stay lowercase","inputs":{"s":"war of the worlds"},"expected_output":"War of the Worlds","policy":"title"},
                    {"name":"every_word","function":"fix_capitals","property":"every word capitalized","inputs":{"s":"war of the worlds"},"expected_output":"War Of The Worlds","policy":"every"},
                    {"name":"single_word","function":"fix_capitals","property":"first letter uppercased","inputs":{"s":"hELLO"},"expected_output":"Hello"}
                ]
            }"#,
        )
        .expect("valid fixture json")
    }

    #[test]
    fn title_runner_executes_matching_cases() {
        let results = TestRunner::new("smoke", Capitalization::Title).run(&capitals_fixture());
        let names: Vec<_> = results.iter().map(|r| r.case_name.as_str()).collect();
        assert_eq!(names, ["title_connectors", "single_word"]);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn every_word_runner_executes_matching_cases() {
        let results = TestRunner::new("smoke", Capitalization::EveryWord).run(&capitals_fixture());
        let names: Vec<_> = results.iter().map(|r| r.case_name.as_str()).collect();
        assert_eq!(names, ["every_word", "single_word"]);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn mismatch_carries_diff() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"text/spaces",
                "captured_at":"2026-10-01T00:00:00Z",
                "cases":[
                    {"name":"wrong","function":"remove_duplicate_spaces","property":"collapse","inputs":{"s":"a  b"},"expected_output":"a  b"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("diff", Capitalization::Title).run(&fixture);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "a b");
        assert!(results[0].diff.is_some());
    }

    #[test]
    fn unsupported_function_fails() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"text/misc",
                "captured_at":"2026-10-01T00:00:00Z",
                "cases":[
                    {"name":"unknown","function":"strlen","property":"n/a","inputs":{},"expected_output":"0"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("unknown", Capitalization::Title).run(&fixture);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "unsupported: unknown function 'strlen'");
    }

    #[test]
    fn logged_run_emits_one_valid_entry_per_case() {
        let mut log = LogEmitter::to_buffer("fixtures", "run-1");
        let results = TestRunner::new("logged", Capitalization::Title)
            .run_logged(&capitals_fixture(), &mut log)
            .unwrap();
        assert_eq!(results.len(), 2);

        let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
        let (lines, errors) = validate_log_text(&text);
        assert_eq!(lines, 2);
        assert!(errors.is_empty(), "{errors:?}");
        assert!(text.contains(r#""symbol":"fix_capitals""#));
        assert!(text.contains(r#""policy":"title""#));
    }

    #[test]
    fn logged_unsupported_case_is_an_error_outcome() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"text/misc",
                "captured_at":"2026-10-01T00:00:00Z",
                "cases":[
                    {"name":"unknown","function":"strlen","property":"n/a","inputs":{},"expected_output":"0"},
                    {"name":"wrong","function":"remove_duplicate_spaces","property":"collapse","inputs":{"s":"a  b"},"expected_output":"a  b"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let mut log = LogEmitter::to_buffer("fixtures", "run-1");
        TestRunner::new("logged", Capitalization::Title)
            .run_logged(&fixture, &mut log)
            .unwrap();
        let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
        let entries: Vec<_> = text
            .lines()
            .map(|line| crate::structured_log::validate_log_line(line, 1).unwrap())
            .collect();
        assert_eq!(entries[0].outcome, Some(Outcome::Error));
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[1].outcome, Some(Outcome::Fail));
        assert_eq!(entries[1].level, LogLevel::Error);
    }
}
