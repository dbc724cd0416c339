// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules evaluated locally.
//!
//! Only the rules this rule set adds or overrides are implemented here; the
//! rest of the extended conventional preset belongs to the upstream harness.

use crate::commit::ParsedCommit;
use crate::config::{
    Applicability, RuleSetting, RuleValue, HEADER_MAX_LENGTH_RULE, ISSUE_NUMBER_RULE,
};
use crate::error::{ConfigError, Result};

use super::issue::issue_number_required;
use super::outcome::RuleOutcome;

/// A commit message rule.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Get the rule name as used in configuration.
    fn name(&self) -> &str;

    /// Check the commit and report whether it satisfies the rule.
    fn check(
        &self,
        commit: &ParsedCommit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleOutcome;

    /// Reject settings the rule cannot work with.
    fn check_setting(&self, _setting: &RuleSetting) -> Result<()> {
        Ok(())
    }

    /// JavaScript for a commitlint plugin rule, when the rule is not part
    /// of the extended preset.
    fn commitlint_plugin(&self) -> Option<String> {
        None
    }
}

/// Headers must end with `" #<issue-number>"`.
///
/// Applicability is ignored: the requirement has no `never` form.
#[derive(Debug, Default)]
pub struct IssueNumberRequired;

impl Rule for IssueNumberRequired {
    fn name(&self) -> &str {
        ISSUE_NUMBER_RULE
    }

    fn check(
        &self,
        commit: &ParsedCommit,
        _when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleOutcome {
        issue_number_required(Some(commit))
    }

    fn commitlint_plugin(&self) -> Option<String> {
        Some(super::issue::commitlint_plugin_source())
    }
}

/// Headers must not exceed a character count.
#[derive(Debug, Default)]
pub struct HeaderMaxLength;

impl Rule for HeaderMaxLength {
    fn name(&self) -> &str {
        HEADER_MAX_LENGTH_RULE
    }

    fn check(
        &self,
        commit: &ParsedCommit,
        _when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleOutcome {
        let max = match value.and_then(RuleValue::as_number) {
            Some(max) => max,
            None => return RuleOutcome::fail("header-max-length requires a numeric value"),
        };

        let len = commit.header_len();
        if len as u64 <= max {
            RuleOutcome::pass()
        } else {
            RuleOutcome::fail(format!(
                "header must not be longer than {} characters, current length is {}",
                max, len
            ))
        }
    }

    fn check_setting(&self, setting: &RuleSetting) -> Result<()> {
        match setting.value {
            Some(RuleValue::Number(_)) => Ok(()),
            _ => Err(ConfigError::InvalidValue {
                key: format!("rules.{}.value", HEADER_MAX_LENGTH_RULE),
                message: "expected a maximum character count".to_string(),
            }
            .into()),
        }
    }
}

/// All locally evaluated rules.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(IssueNumberRequired), Box::new(HeaderMaxLength)]
}
