// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit-msg hook script.

use crate::version::VERSION;

/// Name of the git hook the linter installs.
pub const HOOK_NAME: &str = "commit-msg";

/// Marker line identifying hooks written by issuelint.
pub const HOOK_MARKER: &str = "# issuelint commit-msg hook";

/// Render the hook script.
///
/// The script hands the message file git passes as `$1` to `issuelint lint`,
/// so a failing lint aborts the commit.
pub fn commit_msg_script() -> String {
    format!(
        r#"#!/bin/sh
{marker}
# Generated by issuelint v{version}. Remove with `issuelint hooks uninstall`.

if ! command -v issuelint >/dev/null 2>&1; then
    echo "issuelint not found in PATH; skipping commit message lint" >&2
    exit 0
fi

exec issuelint lint --edit "$1"
"#,
        marker = HOOK_MARKER,
        version = VERSION,
    )
}

/// Whether a hook script was written by issuelint.
pub fn is_issuelint_hook(content: &str) -> bool {
    content.lines().any(|line| line.trim() == HOOK_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_runs_lint_on_message_file() {
        let script = commit_msg_script();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("issuelint lint --edit \"$1\""));
    }

    #[test]
    fn test_marker_detection() {
        assert!(is_issuelint_hook(&commit_msg_script()));
        assert!(!is_issuelint_hook("#!/bin/sh\nnpx commitlint --edit \"$1\"\n"));
    }
}
