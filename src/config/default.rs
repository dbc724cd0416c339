// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default rule set and example configuration.

use std::collections::BTreeMap;

use super::schema::{LintConfig, RuleSetting, RuleValue};

/// Upstream preset the default rule set extends.
pub const CONVENTIONAL_PRESET: &str = "@commitlint/config-conventional";

/// Name of the trailing issue reference rule.
pub const ISSUE_NUMBER_RULE: &str = "issue-number-required";

/// Name of the header length rule.
pub const HEADER_MAX_LENGTH_RULE: &str = "header-max-length";

/// Rules defined by the conventional preset. Enabled entries are handed to
/// the upstream harness rather than evaluated here.
pub const CONVENTIONAL_RULES: &[&str] = &[
    "body-leading-blank",
    "body-max-line-length",
    "footer-leading-blank",
    "footer-max-line-length",
    "header-max-length",
    "header-trim",
    "subject-case",
    "subject-empty",
    "subject-full-stop",
    "type-case",
    "type-empty",
    "type-enum",
];

/// Header length cap applied on top of the preset.
pub const MAX_HEADER_LENGTH: u64 = 100;

/// The project rule set: any commit type in any case, headers up to 100
/// characters, and a mandatory trailing issue reference.
pub fn default_rules() -> BTreeMap<String, RuleSetting> {
    BTreeMap::from([
        ("type-enum".to_string(), RuleSetting::off()),
        ("type-case".to_string(), RuleSetting::off()),
        (
            HEADER_MAX_LENGTH_RULE.to_string(),
            RuleSetting::error().with_value(RuleValue::Number(MAX_HEADER_LENGTH)),
        ),
        (ISSUE_NUMBER_RULE.to_string(), RuleSetting::error()),
    ])
}

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# issuelint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

extends = ["@commitlint/config-conventional"]

# Allow any commit type, in any case (e.g. "WIP: ...")
[rules.type-enum]
level = "off"

[rules.type-case]
level = "off"

[rules.header-max-length]
level = "error"
when = "always"
value = 100

# Every header must end with " #<issue-number>", except chore(main) releases
[rules.issue-number-required]
level = "error"
when = "always"

[ignores]
defaults = true
patterns = []

# Expected shape of the CI workflow that runs the linter
[workflow]
path = ".github/workflows/commitlint.yml"
job = "commitlint"
runner = "ubuntu-latest"
checkout_action = "actions/checkout@v4"
fetch_depth = 0
lint_action = "wagoid/commitlint-github-action@v6"
lint_config_file = ".github/workflows/commitlint.config.mjs"
pull_request_types = ["opened", "synchronize", "reopened"]

[workflow.permissions]
contents = "read"
pull-requests = "read"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleLevel;

    #[test]
    fn test_default_rules() {
        let rules = default_rules();
        assert_eq!(rules["type-enum"].level, RuleLevel::Off);
        assert_eq!(rules["type-case"].level, RuleLevel::Off);
        assert_eq!(rules[ISSUE_NUMBER_RULE].level, RuleLevel::Error);
        assert_eq!(
            rules[HEADER_MAX_LENGTH_RULE].value,
            Some(RuleValue::Number(100))
        );
    }

    #[test]
    fn test_example_config_matches_default() {
        let example: LintConfig =
            toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(example, default_config());
    }
}
