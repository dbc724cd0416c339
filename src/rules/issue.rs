// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Trailing issue reference rule.
//!
//! Every header must end with `" #<digits>"`. Release commits generated by
//! release automation (`chore(main): ...`) are exempt.

use lazy_static::lazy_static;
use regex::Regex;

use crate::commit::ParsedCommit;

use super::outcome::RuleOutcome;

lazy_static! {
    /// Release automation commits.
    static ref RELEASE_COMMIT_REGEX: Regex = Regex::new(r"^chore\(main\):").unwrap();

    /// Space, `#`, then ASCII digits at the very end of the header.
    static ref ISSUE_NUMBER_REGEX: Regex = Regex::new(r" #[0-9]+$").unwrap();
}

/// Reported when there is no header to inspect.
pub const UNPARSEABLE_MESSAGE: &str = "Commit message could not be parsed";

/// Reported when the header lacks the issue reference suffix.
pub const MISSING_ISSUE_MESSAGE: &str = "Commit message must end with \" #<issue-number>\" (e.g., \"feat: add feature #123\", \"WIP: working on feature #456\"). Exception: chore(main) commits do not require issue numbers.";

/// Check that a commit header ends with an issue reference.
pub fn issue_number_required(commit: Option<&ParsedCommit>) -> RuleOutcome {
    let header = match commit.and_then(|c| c.header.as_deref()) {
        Some(header) if !header.is_empty() => header,
        _ => return RuleOutcome::fail(UNPARSEABLE_MESSAGE),
    };

    if RELEASE_COMMIT_REGEX.is_match(header) {
        return RuleOutcome::pass();
    }

    if !ISSUE_NUMBER_REGEX.is_match(header) {
        return RuleOutcome::fail(MISSING_ISSUE_MESSAGE);
    }

    RuleOutcome::pass()
}

/// The same check as a commitlint plugin rule, in JavaScript.
///
/// Indented to sit under `plugins[].rules` in an exported config module.
pub fn commitlint_plugin_source() -> String {
    format!(
        r#"(parsed) => {{
          if (!parsed || !parsed.header) {{
            return [false, {unparseable}];
          }}
          if ({release}.test(parsed.header)) {{
            return [true, ''];
          }}
          if (!{issue}.test(parsed.header)) {{
            return [false, {missing}];
          }}
          return [true, ''];
        }}"#,
        unparseable = js_string(UNPARSEABLE_MESSAGE),
        release = js_regex(&RELEASE_COMMIT_REGEX),
        issue = js_regex(&ISSUE_NUMBER_REGEX),
        missing = js_string(MISSING_ISSUE_MESSAGE),
    )
}

fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

fn js_regex(re: &Regex) -> String {
    format!("/{}/", re.as_str().replace('/', "\\/"))
}
