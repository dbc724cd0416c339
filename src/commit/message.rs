// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Conventional commit header: `type(scope)!: subject`.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w*)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    ).unwrap();

    /// A git trailer or issue reference line (`Refs: #12`, `Closes #4`).
    static ref TRAILER_REGEX: Regex = Regex::new(
        r"^(?:[\w-]+(?:: | #)|BREAKING[ -]CHANGE: )"
    ).unwrap();
}

/// Marker git writes above the diff when committing with `--verbose`.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A commit message split into its conventional parts.
///
/// Parsing never fails: anything that does not look like a conventional
/// header simply leaves the structured fields empty. Only `header` is
/// required by the issue-number rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommit {
    /// The message with comments and scissors content removed.
    pub raw: String,
    /// First line of the message.
    pub header: Option<String>,
    /// Commit type (`feat`, `fix`, `WIP`, ...).
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject following `type(scope): `.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (trailers, references, breaking changes).
    pub footer: Option<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
}

impl ParsedCommit {
    /// Build a commit that only carries a header.
    pub fn from_header(header: impl Into<String>) -> Self {
        let header = header.into();
        let mut commit = Self::parse(&header);
        if commit.header.is_none() {
            commit.header = Some(header);
        }
        commit
    }

    /// Parse a raw commit message as written to `COMMIT_EDITMSG`.
    pub fn parse(message: &str) -> Self {
        let cleaned = strip_comments(message);
        let mut commit = Self {
            raw: cleaned.clone(),
            ..Self::default()
        };

        let mut lines = cleaned.lines();
        let header = match lines.next() {
            Some(line) => line.trim_end_matches('\r').to_string(),
            None => return commit,
        };

        if let Some(captures) = HEADER_REGEX.captures(&header) {
            commit.commit_type = captures
                .name("type")
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty());
            commit.scope = captures
                .name("scope")
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty());
            commit.subject = captures
                .name("subject")
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty());
            commit.is_breaking = captures.name("breaking").is_some();
        }
        commit.header = Some(header);

        let rest = lines.collect::<Vec<_>>().join("\n");
        let mut paragraphs: Vec<&str> = rest
            .split("\n\n")
            .map(|p| p.trim_matches('\n'))
            .filter(|p| !p.trim().is_empty())
            .collect();

        if paragraphs
            .last()
            .map(|p| p.lines().all(|l| TRAILER_REGEX.is_match(l) || l.starts_with(' ')))
            .unwrap_or(false)
        {
            commit.footer = paragraphs.pop().map(str::to_string);
        }
        if !paragraphs.is_empty() {
            commit.body = Some(paragraphs.join("\n\n"));
        }

        commit.is_breaking = commit.is_breaking
            || commit
                .footer
                .as_deref()
                .map(|f| f.contains("BREAKING CHANGE") || f.contains("BREAKING-CHANGE"))
                .unwrap_or(false);

        commit
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header
            .as_deref()
            .map(|h| h.chars().count())
            .unwrap_or(0)
    }
}

/// Drop comment lines and everything below a scissors line, then drop
/// surrounding blank or whitespace-only lines.
fn strip_comments(message: &str) -> String {
    let kept: Vec<&str> = message
        .lines()
        .take_while(|line| line.trim_end() != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect();

    let start = kept
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(kept.len());
    let end = kept
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |last| last + 1);

    kept[start..end].join("\n")
}
