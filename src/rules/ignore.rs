// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commits that are skipped entirely.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::IgnoreConfig;
use crate::error::{ConfigError, LintError, Result};

lazy_static! {
    /// Messages produced by git, forges and history rewriting.
    static ref DEFAULT_IGNORES: Vec<Regex> = vec![
        Regex::new(r"(?m)^((Merge pull request)|(Merge (.*?) into (.*?)|(Merge branch (.*?)))(?:\r?\n)*$)").unwrap(),
        Regex::new(r"(?m)^(Merge tag (.*?))(?:\r?\n)*$").unwrap(),
        Regex::new(r"^(R|r)evert (.*)").unwrap(),
        Regex::new(r"^(amend|fixup|squash)!").unwrap(),
        Regex::new(r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))").unwrap(),
        Regex::new(r"^Merge remote-tracking branch(\s*)(.*)").unwrap(),
        Regex::new(r"^Automatic merge(.*)").unwrap(),
        Regex::new(r"^Auto-merged (.*?) into (.*)").unwrap(),
    ];

    static ref CHORE_PREFIX: Regex = Regex::new(r"^chore(\([^)]+\))?:").unwrap();

    static ref SEMVER: Regex = Regex::new(
        r"^v?(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$"
    ).unwrap();
}

/// Decides whether a message is exempt from linting.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    defaults: bool,
    patterns: Vec<Regex>,
}

impl IgnoreMatcher {
    /// Compile the configured patterns.
    pub fn new(config: &IgnoreConfig) -> Result<Self> {
        let patterns = config
            .patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    LintError::Config(ConfigError::InvalidValue {
                        key: "ignores.patterns".to_string(),
                        message: format!("'{}': {}", pattern, e),
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            defaults: config.defaults,
            patterns,
        })
    }

    /// Check a cleaned commit message.
    pub fn is_ignored(&self, message: &str) -> bool {
        if self.defaults
            && (DEFAULT_IGNORES.iter().any(|re| re.is_match(message))
                || is_version_commit(message))
        {
            return true;
        }
        self.patterns.iter().any(|re| re.is_match(message))
    }
}

/// A header that is only a version number, optionally after `chore(...):`.
fn is_version_commit(message: &str) -> bool {
    let first_line = message.lines().next().unwrap_or("");
    let stripped = CHORE_PREFIX.replace(first_line, "");
    SEMVER.is_match(stripped.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> IgnoreMatcher {
        IgnoreMatcher::new(&IgnoreConfig::default()).unwrap()
    }

    #[test]
    fn test_merge_commits_ignored() {
        let matcher = defaults();
        assert!(matcher.is_ignored("Merge pull request #12 from user/branch"));
        assert!(matcher.is_ignored("Merge branch 'main' into feature"));
        assert!(matcher.is_ignored("Merge tag 'v1.0.0'"));
        assert!(matcher.is_ignored("Merge remote-tracking branch 'origin/main'"));
        assert!(matcher.is_ignored("Automatic merge from release"));
    }

    #[test]
    fn test_rewrites_ignored() {
        let matcher = defaults();
        assert!(matcher.is_ignored("Revert \"feat: add login #42\""));
        assert!(matcher.is_ignored("fixup! feat: add login #42"));
        assert!(matcher.is_ignored("squash! fix: typo"));
    }

    #[test]
    fn test_version_commits_ignored() {
        let matcher = defaults();
        assert!(matcher.is_ignored("1.2.0"));
        assert!(matcher.is_ignored("v2.0.0-rc.1"));
        assert!(matcher.is_ignored("chore(release): 1.2.0"));
        assert!(!matcher.is_ignored("chore(release): ship 1.2.0"));
    }

    #[test]
    fn test_regular_commits_not_ignored() {
        let matcher = defaults();
        assert!(!matcher.is_ignored("feat: add login #42"));
        assert!(!matcher.is_ignored("fix: typo"));
        assert!(!matcher.is_ignored("WIP: merge branch handling"));
    }

    #[test]
    fn test_defaults_can_be_disabled() {
        let matcher = IgnoreMatcher::new(&IgnoreConfig {
            defaults: false,
            patterns: vec!["^Bump ".to_string()],
        })
        .unwrap();
        assert!(!matcher.is_ignored("Merge branch 'main' into feature"));
        assert!(matcher.is_ignored("Bump serde from 1.0.1 to 1.0.2"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = IgnoreMatcher::new(&IgnoreConfig {
            defaults: true,
            patterns: vec!["(unclosed".to_string()],
        });
        assert!(result.is_err());
    }
}
