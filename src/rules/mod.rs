// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! The trailing issue reference check lives in [`issue`]; [`RuleEngine`]
//! applies it, together with the other locally evaluated rules, according to
//! the configured rule set.

mod builtin;
mod engine;
mod ignore;
pub mod issue;
mod outcome;
mod validator;

pub use builtin::{builtin_rules, HeaderMaxLength, IssueNumberRequired, Rule};
pub use engine::RuleEngine;
pub use ignore::IgnoreMatcher;
pub use issue::issue_number_required;
pub use outcome::RuleOutcome;
pub use validator::{ValidationIssue, ValidationResult};
