// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from issuelint.toml.
//! Rule settings mirror commitlint's `[level, applicability, value]` triples so
//! they can be handed to an upstream harness unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The main configuration structure for issuelint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Upstream rule presets this rule set builds on.
    pub extends: Vec<String>,

    /// Rule settings keyed by rule name.
    pub rules: BTreeMap<String, RuleSetting>,

    /// Commits that are never linted.
    pub ignores: IgnoreConfig,

    /// Expected shape of the CI workflow that runs the linter.
    pub workflow: WorkflowConfig,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extends: vec![super::default::CONVENTIONAL_PRESET.to_string()],
            rules: super::default::default_rules(),
            ignores: IgnoreConfig::default(),
            workflow: WorkflowConfig::default(),
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Severity of a rule, serialized as commitlint's 0/1/2 on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Rule is disabled.
    #[default]
    Off,
    /// Violations are reported but do not fail the lint.
    Warning,
    /// Violations fail the lint.
    Error,
}

impl RuleLevel {
    /// Numeric level used by commitlint.
    pub fn code(self) -> u8 {
        match self {
            RuleLevel::Off => 0,
            RuleLevel::Warning => 1,
            RuleLevel::Error => 2,
        }
    }
}

/// Whether a rule condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }
}

/// Rule argument (a length, a case name, a list of types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(u64),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Setting for a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetting {
    pub level: RuleLevel,
    pub when: Applicability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
}

impl RuleSetting {
    /// A disabled rule.
    pub fn off() -> Self {
        Self::default()
    }

    /// An error-level rule applied `always`.
    pub fn error() -> Self {
        Self {
            level: RuleLevel::Error,
            ..Self::default()
        }
    }

    /// A warning-level rule applied `always`.
    pub fn warning() -> Self {
        Self {
            level: RuleLevel::Warning,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.level != RuleLevel::Off
    }
}

/// Which commits are skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Skip merge, revert, fixup/squash and bare version commits.
    pub defaults: bool,

    /// Extra regular expressions matched against the whole message.
    pub patterns: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            defaults: true,
            patterns: Vec::new(),
        }
    }
}

/// Expected structure of the commit-lint CI workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Workflow file, relative to the repository root.
    pub path: PathBuf,

    /// Job that runs the linter.
    pub job: String,

    /// Expected `runs-on` value for that job.
    pub runner: String,

    /// Checkout action reference.
    pub checkout_action: String,

    /// Required `fetch-depth` for the checkout step.
    pub fetch_depth: u64,

    /// Linter action reference.
    pub lint_action: String,

    /// Required `configFile` input of the linter step.
    pub lint_config_file: String,

    /// `pull_request` activity types the workflow must trigger on.
    pub pull_request_types: Vec<String>,

    /// Required top-level token permissions.
    pub permissions: BTreeMap<String, String>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".github/workflows/commitlint.yml"),
            job: "commitlint".to_string(),
            runner: "ubuntu-latest".to_string(),
            checkout_action: "actions/checkout@v4".to_string(),
            fetch_depth: 0,
            lint_action: "wagoid/commitlint-github-action@v6".to_string(),
            lint_config_file: ".github/workflows/commitlint.config.mjs".to_string(),
            pull_request_types: vec![
                "opened".to_string(),
                "synchronize".to_string(),
                "reopened".to_string(),
            ],
            permissions: BTreeMap::from([
                ("contents".to_string(), "read".to_string()),
                ("pull-requests".to_string(), "read".to_string()),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.extends, vec!["@commitlint/config-conventional"]);
        assert!(config.ignores.defaults);
        assert_eq!(config.workflow.job, "commitlint");
    }

    #[test]
    fn test_rule_level_codes() {
        assert_eq!(RuleLevel::Off.code(), 0);
        assert_eq!(RuleLevel::Warning.code(), 1);
        assert_eq!(RuleLevel::Error.code(), 2);
    }

    #[test]
    fn test_rule_setting_from_toml() {
        let setting: RuleSetting =
            toml::from_str("level = \"error\"\nwhen = \"always\"\nvalue = 100").unwrap();
        assert_eq!(setting.level, RuleLevel::Error);
        assert_eq!(setting.value, Some(RuleValue::Number(100)));

        let setting: RuleSetting = toml::from_str("level = \"off\"").unwrap();
        assert!(!setting.is_enabled());
        assert_eq!(setting.when, Applicability::Always);
    }

    #[test]
    fn test_rule_value_list() {
        let setting: RuleSetting =
            toml::from_str("level = \"warning\"\nvalue = [\"feat\", \"fix\"]").unwrap();
        assert_eq!(
            setting.value,
            Some(RuleValue::List(vec!["feat".to_string(), "fix".to_string()]))
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = LintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("issue-number-required"));
        assert!(toml_str.contains("fetch_depth"));
    }
}
