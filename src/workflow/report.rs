// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Workflow check results.

use crate::cli::args::OutputFormat;
use console::style;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of one structural expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowCheck {
    /// What was expected, e.g. "should use ubuntu-latest runner".
    pub name: String,
    pub passed: bool,
    /// What was found instead, for failed checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl WorkflowCheck {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: None,
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }

    /// Pass or fail depending on `ok`; the detail is only kept on failure.
    pub fn expect(name: impl Into<String>, ok: bool, detail: impl FnOnce() -> String) -> Self {
        if ok {
            Self::pass(name)
        } else {
            Self::fail(name, detail())
        }
    }
}

/// All checks run against one workflow file.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowReport {
    pub path: PathBuf,
    pub checks: Vec<WorkflowCheck>,
}

impl WorkflowReport {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            checks: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        if let Some(OutputFormat::Json) = format {
            let mut json = serde_json::to_value(self).unwrap_or_default();
            if let Some(map) = json.as_object_mut() {
                map.insert("passed".to_string(), serde_json::Value::Bool(self.passed()));
            }
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
            return;
        }

        println!("{}", style(self.path.display()).bold());
        for check in &self.checks {
            if check.passed {
                println!("  {} {}", style("✓").green().bold(), check.name);
            } else {
                println!("  {} {}", style("✗").red().bold(), check.name);
                if let Some(ref detail) = check.detail {
                    println!("    {} {}", style("→").dim(), style(detail).dim());
                }
            }
        }
    }
}
