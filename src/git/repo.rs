// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, LintError, Result};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository for reading commit messages.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            LintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                LintError::Git(GitError::NotARepository)
            } else {
                LintError::Git(GitError::from(e))
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        self.inner
            .revparse_single(reference)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|e| {
                LintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", reference, e.message()),
                })
            })
    }

    /// Get the commit message for a reference.
    pub fn commit_message(&self, reference: &str) -> Result<(String, String)> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok((commit.id().to_string(), message.to_string()))
    }

    /// Get `(sha, message)` pairs reachable from the right side of `from..to`
    /// but not from the left, newest first. An empty side means `HEAD`.
    pub fn commits_in_range(&self, range: &str) -> Result<Vec<(String, String)>> {
        let (from, to) = match range.split_once("..") {
            Some((from, to)) => (non_empty_or_head(from), non_empty_or_head(to)),
            None => return Ok(vec![self.commit_message(range)?]),
        };

        let walk_failed = |command: &str, e: git2::Error| {
            LintError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_failed("revwalk", e))?;
        revwalk
            .set_sorting(git2::Sort::TOPOLOGICAL)
            .map_err(|e| walk_failed("revwalk.sort", e))?;
        revwalk
            .push(self.get_commit(to)?.id())
            .map_err(|e| walk_failed("revwalk.push", e))?;
        revwalk
            .hide(self.get_commit(from)?.id())
            .map_err(|e| walk_failed("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_failed("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                LintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid.to_string(), commit.message().unwrap_or("").to_string()));
        }

        Ok(commits)
    }
}

fn non_empty_or_head(side: &str) -> &str {
    if side.is_empty() {
        "HEAD"
    } else {
        side
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}
