// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! issuelint - Commit message linting with required issue references
//!
//! Every commit header must end with an issue reference (` #123`), except
//! release commits whose header starts with `chore(main):`.
//!
//! # Features
//!
//! - **Issue Rule**: The `issue-number-required` header check
//! - **Rule Engine**: commitlint-style `[level, when, value]` rule settings
//! - **Git Integration**: Lint single commits or `from..to` ranges
//! - **Workflow Check**: Verify the CI workflow that runs the linter
//! - **Git Hooks**: Install a `commit-msg` hook
//!
//! # Example
//!
//! ```no_run
//! use issuelint::config::LintConfig;
//! use issuelint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(LintConfig::load()?)?;
//! let result = engine.validate_message("feat: add login page #42");
//! assert!(result.is_valid());
//! # Ok::<(), issuelint::LintError>(())
//! ```

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;
pub mod workflow;

pub use config::LintConfig;
pub use error::{LintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of issuelint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
