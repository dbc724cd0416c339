// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages for the `check` command and locates the hooks
//! directory.

mod repo;

pub use repo::{open_repo, Repository};
