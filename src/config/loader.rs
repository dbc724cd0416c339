// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, LintError, Result};
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["issuelint.toml", ".issuelint.toml", ".config/issuelint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in_dir(&current) {
            return Some(found);
        }
        if !current.pop() {
            break;
        }
    }

    if let Some(found) = dirs::home_dir().and_then(|home| find_in_dir(&home)) {
        return Some(found);
    }

    dirs::config_dir()
        .map(|dir| dir.join("issuelint").join("config.toml"))
        .filter(|path| path.exists())
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path, layered over the defaults.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    let overlay = parse_config(&content)?;
    Ok(merge_configs(LintConfig::default(), overlay))
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Merge two configurations, with the overlay taking precedence.
///
/// Rule settings are overlaid per rule name, so a file that only tweaks one
/// rule keeps the rest of the base rule set.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    let mut rules = base.rules;
    rules.extend(overlay.rules);

    LintConfig {
        extends: if overlay.extends.is_empty() {
            base.extends
        } else {
            overlay.extends
        },
        rules,
        ignores: overlay.ignores,
        workflow: overlay.workflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleLevel, RuleValue};
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[rules.type-enum]\nlevel = \"loud\"");
        assert!(matches!(
            result,
            Err(LintError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_merge_keeps_base_rules() {
        let overlay = parse_config(
            r#"
[rules.header-max-length]
level = "warning"
value = 72
"#,
        )
        .unwrap();
        let merged = merge_configs(LintConfig::default(), overlay);

        let header = &merged.rules["header-max-length"];
        assert_eq!(header.level, RuleLevel::Warning);
        assert_eq!(header.value, Some(RuleValue::Number(72)));
        assert_eq!(merged.rules["issue-number-required"].level, RuleLevel::Error);
        assert_eq!(merged.rules["type-enum"].level, RuleLevel::Off);
    }

    #[test]
    fn test_merge_empty_extends_keeps_base() {
        let overlay = parse_config("extends = []").unwrap();
        let merged = merge_configs(LintConfig::default(), overlay);
        assert_eq!(merged.extends, LintConfig::default().extends);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("issuelint.toml");
        std::fs::write(
            &path,
            "[rules.issue-number-required]\nlevel = \"warning\"\n\n[workflow]\njob = \"lint\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.rules["issue-number-required"].level, RuleLevel::Warning);
        assert_eq!(config.workflow.job, "lint");
        assert_eq!(config.workflow.runner, "ubuntu-latest");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(LintError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".issuelint.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".issuelint.toml"));
    }
}
