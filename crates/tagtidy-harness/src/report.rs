//! Conformance report rendering.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// Verification results of one harness run, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    /// Capitalization policies the run covered, e.g. `title, every`.
    pub policy: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown. Failed cases get their diff appended.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", self.title);
        let _ = writeln!(out, "- Policy: {}", self.policy);
        let _ = writeln!(out, "- Timestamp: {}", self.timestamp);
        let _ = writeln!(out, "- Total: {}", self.summary.total);
        let _ = writeln!(out, "- Passed: {}", self.summary.passed);
        let _ = writeln!(out, "- Failed: {}\n", self.summary.failed);

        out.push_str("| Case | Property | Status |\n");
        out.push_str("|------|----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            let _ = writeln!(out, "| {} | {} | {} |", r.case_name, r.property, status);
        }

        for r in self.summary.failures() {
            if let Some(diff) = &r.diff {
                let _ = writeln!(out, "\n## {}\n\n```diff\n{}\n```", r.case_name, diff.trim_end());
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
