// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::ParsedCommit;
use crate::config::{LintConfig, CONVENTIONAL_RULES};
use crate::error::{ConfigError, Result};
use crate::git::Repository;

use super::builtin::{builtin_rules, Rule};
use super::ignore::IgnoreMatcher;
use super::validator::{ValidationIssue, ValidationResult};

/// Applies the configured rule set to commit messages.
#[derive(Debug)]
pub struct RuleEngine {
    config: LintConfig,
    rules: Vec<Box<dyn Rule>>,
    ignores: IgnoreMatcher,
}

impl RuleEngine {
    /// Create a rule engine with the built-in rules.
    pub fn new(config: LintConfig) -> Result<Self> {
        Self::with_rules(config, builtin_rules())
    }

    /// Create a rule engine with an explicit set of local rules.
    ///
    /// Every configured rule name must be either a local rule or part of the
    /// extended conventional preset.
    pub fn with_rules(config: LintConfig, rules: Vec<Box<dyn Rule>>) -> Result<Self> {
        for (name, setting) in &config.rules {
            match rules.iter().find(|r| r.name() == name) {
                Some(rule) if setting.is_enabled() => rule.check_setting(setting)?,
                Some(_) => {}
                None if CONVENTIONAL_RULES.contains(&name.as_str()) => {}
                None => {
                    return Err(ConfigError::UnknownRule { name: name.clone() }.into());
                }
            }
        }

        let ignores = IgnoreMatcher::new(&config.ignores)?;

        Ok(Self {
            config,
            rules,
            ignores,
        })
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Validate a parsed commit against every enabled rule.
    pub fn validate(&self, commit: &ParsedCommit) -> ValidationResult {
        let mut result = ValidationResult::new(commit.raw.clone());

        for (name, setting) in self.config.rules.iter().filter(|(_, s)| s.is_enabled()) {
            let rule = match self.rules.iter().find(|r| r.name() == name) {
                Some(rule) => rule,
                None => {
                    tracing::debug!(rule = %name, "Delegating rule to upstream preset");
                    result.delegated.push(name.clone());
                    continue;
                }
            };

            let outcome = rule.check(commit, setting.when, setting.value.as_ref());
            tracing::debug!(rule = %name, valid = outcome.valid, "Evaluated rule");

            if !outcome.valid {
                result.push(ValidationIssue {
                    code: name.clone(),
                    message: outcome.message,
                    level: setting.level,
                });
            }
        }

        result
    }

    /// Parse and validate a raw commit message, honouring ignore patterns.
    pub fn validate_message(&self, message: &str) -> ValidationResult {
        let parsed = ParsedCommit::parse(message);

        if self.ignores.is_ignored(&parsed.raw) {
            tracing::debug!("Ignoring commit: {}", parsed.header.as_deref().unwrap_or(""));
            let mut result = ValidationResult::new(parsed.raw);
            result.ignored = true;
            return result;
        }

        self.validate(&parsed)
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, repo: &Repository, reference: &str) -> Result<ValidationResult> {
        let (sha, message) = repo.commit_message(reference)?;
        let mut result = self.validate_message(&message);
        result.commit_sha = Some(sha);
        Ok(result)
    }

    /// Check every commit in a `from..to` range.
    pub fn check_range(&self, repo: &Repository, range: &str) -> Result<Vec<ValidationResult>> {
        let commits = repo.commits_in_range(range)?;
        tracing::debug!("Checking {} commit(s) in {}", commits.len(), range);

        Ok(commits
            .into_iter()
            .map(|(sha, message)| {
                let mut result = self.validate_message(&message);
                result.commit_sha = Some(sha);
                result
            })
            .collect())
    }
}
