//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Operation being tested.
    pub function: String,
    /// Property or example the case pins down.
    pub property: String,
    /// Input parameters (serialized).
    pub inputs: serde_json::Value,
    /// Expected output (serialized as string for comparison).
    pub expected_output: String,
    /// Capitalization policy the case runs under: `title`, `every` or `both`.
    #[serde(default = "default_policy")]
    pub policy: String,
}

fn default_policy() -> String {
    String::from("both")
}

/// A collection of fixture cases for one family of operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Operation family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Self::from_json(&content).map_err(|source| HarnessError::FixtureJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Lists the `*.json` fixture files under `path`, sorted by name. A file path
/// is returned as is.
pub fn fixture_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = std::fs::read_dir(path).map_err(|e| HarnessError::io(path, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HarnessError::io(path, e))?;
        let file = entry.path();
        if file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(HarnessError::NoFixtures(path.to_path_buf()));
    }
    Ok(files)
}

/// Loads every fixture set under `path` (see [`fixture_files`]).
pub fn load_fixture_sets(path: &Path) -> Result<Vec<FixtureSet>> {
    fixture_files(path)?
        .iter()
        .map(|file| FixtureSet::from_file(file))
        .collect()
}
