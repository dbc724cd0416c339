// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// issuelint - Commit message linting with required issue references
///
/// Checks that commit headers end with an issue reference such as `#123`,
/// with an exemption for release commits.
#[derive(Parser, Debug)]
#[command(name = "issuelint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Lint commit messages for trailing issue references", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ISSUELINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message from a file, an argument or stdin
    Lint(LintArgs),

    /// Lint commits already in the repository
    Check(CheckArgs),

    /// Check the CI workflow that runs the linter
    Workflow(WorkflowArgs),

    /// Inspect or create configuration
    Config(ConfigArgs),

    /// Manage the commit-msg hook
    Hooks(HooksArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// Read the message from a file, e.g. .git/COMMIT_EDITMSG
    #[arg(short, long, value_name = "FILE", conflicts_with = "message")]
    pub edit: Option<PathBuf>,

    /// Lint the given message text
    #[arg(short, long)]
    pub message: Option<String>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or `from..to` range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check every commit from TARGET (exclusive) up to HEAD
    #[arg(long)]
    pub range: bool,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the workflow command.
#[derive(Parser, Debug, Default, Clone)]
pub struct WorkflowArgs {
    /// Workflow file to check (default: the configured workflow path)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Arguments for the config command.
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print an equivalent commitlint.config.mjs, plugins included
    Export,

    /// Write an issuelint.toml with the default rules
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the commit-msg hook
    Install {
        /// Replace an existing hook, keeping it as a backup
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
            strict: false,
        }
    }
}

impl CheckArgs {
    /// The revision range to walk, if the target names more than one commit.
    ///
    /// An explicit `a..b` is used as is; `--range` turns a single ref into
    /// `<ref>..HEAD`.
    pub fn range_spec(&self) -> Option<String> {
        if self.target.contains("..") {
            Some(self.target.clone())
        } else if self.range {
            Some(format!("{}..HEAD", self.target))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lint_edit() {
        let args = Cli::parse_from(["issuelint", "lint", "--edit", ".git/COMMIT_EDITMSG"]);
        if let Commands::Lint(lint) = args.command {
            assert_eq!(lint.edit, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
            assert!(lint.message.is_none());
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_lint_edit_conflicts_with_message() {
        let result = Cli::try_parse_from(["issuelint", "lint", "-e", "MSG", "-m", "feat: x #1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["issuelint", "check", "HEAD~5..HEAD", "--strict"]);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.target, "HEAD~5..HEAD");
            assert!(check_args.strict);
            assert_eq!(check_args.range_spec().as_deref(), Some("HEAD~5..HEAD"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_defaults_to_head() {
        let args = Cli::parse_from(["issuelint", "check"]);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.target, "HEAD");
            assert!(check_args.range_spec().is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_range_flag_walks_to_head() {
        let args = Cli::parse_from(["issuelint", "check", "origin/main", "--range"]);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.range_spec().as_deref(), Some("origin/main..HEAD"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_config_init() {
        let args = Cli::parse_from(["issuelint", "config", "init", "--force"]);
        assert!(matches!(
            args.command,
            Commands::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["issuelint", "hooks", "install", "--force"]);
        assert!(matches!(
            args.command,
            Commands::Hooks(HooksArgs {
                action: HooksAction::Install { force: true }
            })
        ));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["issuelint", "workflow", "--format", "json", "-d"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(matches!(args.command, Commands::Workflow(WorkflowArgs { path: None })));
    }
}
