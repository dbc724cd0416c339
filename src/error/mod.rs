// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for issuelint.
//!
//! Each concern gets its own enum; [`LintError`] aggregates them so that
//! library functions can return a single [`Result`] type.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for issuelint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint outcome errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Workflow check errors
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule '{name}'")]
    UnknownRule { name: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}. Use --force to overwrite.")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Raised when linted commits do not satisfy the rule set.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Commit lint failed: {errors} error(s), {warnings} warning(s)")]
    LintFailed { errors: usize, warnings: usize },
}

/// Workflow definition errors.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Failed to read workflow {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse workflow {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{failed} of {total} workflow checks failed")]
    ChecksFailed { failed: usize, total: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Hook '{hook}' was not installed by issuelint")]
    NotOurs { hook: String },
}

/// Result type alias for issuelint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
