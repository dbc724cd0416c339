// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::config::RuleLevel;
use console::{style, Style};
use serde::Serialize;

/// A single failed rule.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Name of the rule that failed.
    pub code: String,
    /// Explanation returned by the rule.
    pub message: String,
    /// Configured severity.
    pub level: RuleLevel,
}

impl ValidationIssue {
    pub fn is_error(&self) -> bool {
        self.level == RuleLevel::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = if self.is_error() {
            (style("✗").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        )
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// The cleaned message.
    pub message: String,
    /// Commit SHA if validating an existing commit.
    #[serde(rename = "commit")]
    pub commit_sha: Option<String>,
    /// Error-level failures.
    pub errors: Vec<ValidationIssue>,
    /// Warning-level failures.
    pub warnings: Vec<ValidationIssue>,
    /// Enabled preset rules left to the upstream harness.
    pub delegated: Vec<String>,
    /// Whether the message matched an ignore pattern and was not linted.
    pub ignored: bool,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(message: String) -> Self {
        Self {
            message,
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            delegated: Vec::new(),
            ignored: false,
        }
    }

    /// Record a failed rule under its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.level {
            RuleLevel::Error => self.errors.push(issue),
            RuleLevel::Warning => self.warnings.push(issue),
            RuleLevel::Off => {}
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// First line of the linted message.
    pub fn header(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!(
                "{}",
                serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
            ),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.ignored {
            style("⊘").dim()
        } else if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                println!("{} {} {}", status, style(short_sha).cyan(), self.header());
            }
            None => println!("{} {}", status, self.header()),
        }

        if self.ignored {
            println!("  {}", style("ignored").dim());
            return;
        }

        for issue in self.errors.iter().chain(&self.warnings) {
            println!("  {}", issue.format());
        }
    }

    /// JSON representation for machine-readable output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::to_value(self).unwrap_or_default();
        if let Some(map) = json.as_object_mut() {
            map.insert("valid".to_string(), serde_json::Value::Bool(self.is_valid()));
        }
        json
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
