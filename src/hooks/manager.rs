// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the commit-msg hook.

use crate::error::{HookError, LintError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::template::{commit_msg_script, is_issuelint_hook, HOOK_NAME};

/// State of the commit-msg hook in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// No commit-msg hook present.
    Missing,
    /// Our hook is installed.
    Installed,
    /// Some other commit-msg hook is present.
    Foreign,
}

/// Manager for the commit-msg hook.
#[derive(Debug)]
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::with_hooks_dir(repo.git_dir().join("hooks"))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn with_hooks_dir(hooks_dir: impl Into<PathBuf>) -> Result<Self> {
        let hooks_dir = hooks_dir.into();

        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                install_failed(format!("Failed to create hooks directory: {}", e))
            })?;
        }

        Ok(Self { hooks_dir })
    }

    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", HOOK_NAME))
    }

    /// Install the hook.
    ///
    /// A foreign hook is only replaced with `force`, and is then kept as
    /// `commit-msg.backup` so that uninstall can restore it.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::Foreign if !force => {
                return Err(HookError::AlreadyExists {
                    hook: HOOK_NAME.to_string(),
                }
                .into());
            }
            HookStatus::Foreign => {
                tracing::debug!("Backing up existing hook to {:?}", self.backup_path());
                fs::rename(&hook_path, self.backup_path()).map_err(|e| {
                    install_failed(format!("Failed to backup existing hook: {}", e))
                })?;
            }
            HookStatus::Installed | HookStatus::Missing => {}
        }

        fs::write(&hook_path, commit_msg_script())
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;
        make_executable(&hook_path)?;

        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Remove our hook, restoring any backed-up hook.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn uninstall(&self) -> Result<bool> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::Missing => return Ok(false),
            HookStatus::Foreign => {
                return Err(HookError::NotOurs {
                    hook: HOOK_NAME.to_string(),
                }
                .into());
            }
            HookStatus::Installed => {}
        }

        fs::remove_file(&hook_path).map_err(|e| {
            LintError::Hook(HookError::RemoveFailed {
                hook: HOOK_NAME.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                LintError::Hook(HookError::RemoveFailed {
                    hook: HOOK_NAME.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(true)
    }

    /// Inspect the current hook.
    pub fn status(&self) -> Result<HookStatus> {
        let hook_path = self.hook_path();
        if !hook_path.exists() {
            return Ok(HookStatus::Missing);
        }

        let content = fs::read_to_string(&hook_path)?;
        Ok(if is_issuelint_hook(&content) {
            HookStatus::Installed
        } else {
            HookStatus::Foreign
        })
    }
}

fn install_failed(message: String) -> LintError {
    LintError::Hook(HookError::InstallFailed {
        hook: HOOK_NAME.to_string(),
        message,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
