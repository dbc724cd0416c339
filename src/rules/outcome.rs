// Author: Eshan Roy
// SPDX-License-Identifier: MIT

/// Result of applying one rule to one commit: a pass flag and an
/// explanation, which is empty on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub valid: bool,
    pub message: String,
}

impl RuleOutcome {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}
