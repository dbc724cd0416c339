// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use std::io::Read;
use std::path::Path;

use crate::config::{default::example_config, to_commitlint_module, LintConfig};
use crate::error::{ConfigError, LintError, Result, ResultExt, ValidationError, WorkflowError};
use crate::rules::{RuleEngine, ValidationResult};

use super::args::{
    CheckArgs, Cli, Commands, ConfigAction, ConfigArgs, HooksAction, HooksArgs, LintArgs,
    OutputFormat, WorkflowArgs,
};

/// File written by `config init`.
const CONFIG_FILE_NAME: &str = "issuelint.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    match cli.command.clone() {
        Commands::Lint(args) => run_lint(&cli, config, args),
        Commands::Check(args) => run_check(&cli, config, args),
        Commands::Workflow(args) => run_workflow(&cli, &config, args),
        Commands::Config(args) => run_config(&config, args),
        Commands::Hooks(args) => run_hooks(args),
        Commands::Version => run_version(),
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: LintConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let message = match (&args.edit, &args.message) {
        (Some(path), _) => std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?,
        (None, Some(message)) => message.clone(),
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read commit message from stdin")?;
            buffer
        }
    };

    let engine = RuleEngine::new(config)?;
    let result = engine.validate_message(&message);
    report(cli, &[result], args.strict)
}

/// Run the check command.
fn run_check(cli: &Cli, config: LintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let repo = crate::git::open_repo()?;
    let engine = RuleEngine::new(config)?;

    let results = if let Some(range) = args.range_spec() {
        engine.check_range(&repo, &range)?
    } else {
        vec![engine.check_commit(&repo, &args.target)?]
    };

    report(cli, &results, args.strict)
}

/// Print lint results and turn failures into an error for the exit status.
fn report(cli: &Cli, results: &[ValidationResult], strict: bool) -> Result<()> {
    for result in results {
        result.print(cli.format);
    }

    let errors: usize = results.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = results.iter().map(|r| r.warnings.len()).sum();

    if cli.format != Some(OutputFormat::Json) {
        println!("\n{}", summary_line(results));
    }

    if errors > 0 || (strict && warnings > 0) {
        Err(ValidationError::LintFailed { errors, warnings }.into())
    } else {
        Ok(())
    }
}

/// One-line outcome for the text output.
fn summary_line(results: &[ValidationResult]) -> String {
    match results {
        [] => "No commits to check".to_string(),
        [single] => single.summary(),
        _ => {
            let failed = results.iter().filter(|r| !r.is_valid()).count();
            format!("{} commit(s) checked, {} failed", results.len(), failed)
        }
    }
}

/// Run the workflow command.
fn run_workflow(cli: &Cli, config: &LintConfig, args: WorkflowArgs) -> Result<()> {
    tracing::debug!("Running workflow command with args: {:?}", args);

    let path = args.path.unwrap_or_else(|| config.workflow.path.clone());
    let report = crate::workflow::check_workflow_file(&path, &config.workflow)?;
    report.print(cli.format);

    if report.passed() {
        Ok(())
    } else {
        Err(WorkflowError::ChecksFailed {
            failed: report.failed_count(),
            total: report.checks.len(),
        }
        .into())
    }
}

/// Run the config command.
fn run_config(config: &LintConfig, args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(config).map_err(|e| {
                LintError::Config(ConfigError::ParseError {
                    message: e.to_string(),
                })
            })?;
            print!("{}", content);
        }
        ConfigAction::Export => print!("{}", to_commitlint_module(config)?),
        ConfigAction::Init { force } => run_init(Path::new(CONFIG_FILE_NAME), force)?,
    }

    Ok(())
}

/// Write the example configuration.
fn run_init(config_path: &Path, force: bool) -> Result<()> {
    tracing::debug!("Writing configuration to {:?}", config_path);

    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }
        .into());
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    use crate::hooks::{HookManager, HookStatus, HOOK_NAME};

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { force } => {
            manager.install(force)?;
            println!("{} Installed {} hook", style("✓").green(), HOOK_NAME);
        }
        HooksAction::Uninstall => {
            if manager.uninstall()? {
                println!("{} Uninstalled {} hook", style("✓").green(), HOOK_NAME);
            } else {
                println!("No {} hook installed", HOOK_NAME);
            }
        }
        HooksAction::Status => {
            let (icon, note) = match manager.status()? {
                HookStatus::Installed => (style("✓").green(), "installed"),
                HookStatus::Foreign => (style("!").yellow(), "not managed by issuelint"),
                HookStatus::Missing => (style("✗").red(), "not installed"),
            };
            println!("{} {} ({})", icon, HOOK_NAME, note);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("issuelint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn result(message: &str) -> ValidationResult {
        RuleEngine::new(LintConfig::default())
            .unwrap()
            .validate_message(message)
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(&[]), "No commits to check");
        assert_eq!(summary_line(&[result("feat: add login #42")]), "Valid");
        assert_eq!(
            summary_line(&[result("fix: typo")]),
            "Invalid (1 errors, 0 warnings)"
        );
        assert_eq!(
            summary_line(&[result("feat: add login #42"), result("fix: typo")]),
            "2 commit(s) checked, 1 failed"
        );
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        run_init(&path, false).unwrap();
        let written = LintConfig::load_from(&path).unwrap();
        assert_eq!(written, LintConfig::default());

        assert!(matches!(
            run_init(&path, false),
            Err(LintError::Config(ConfigError::AlreadyExists { .. }))
        ));
        run_init(&path, true).unwrap();
    }
}
