// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hook management.

mod manager;
mod template;

pub use manager::{HookManager, HookStatus};
pub use template::{commit_msg_script, HOOK_MARKER, HOOK_NAME};
