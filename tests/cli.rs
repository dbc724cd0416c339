// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Workspace with the default configuration, so discovery never picks up a
/// config from the machine running the tests.
fn workspace() -> (TempDir, Command) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("issuelint.toml");
    std::fs::write(&config, issuelint::config::default::example_config()).unwrap();

    let mut cmd = Command::cargo_bin("issuelint").unwrap();
    cmd.current_dir(dir.path()).env("ISSUELINT_CONFIG", &config);
    (dir, cmd)
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command run outside any repository with the fixture configuration.
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("issuelint").unwrap();
    cmd.current_dir(std::env::temp_dir())
        .env("ISSUELINT_CONFIG", fixture("issuelint.toml"));
    cmd
}

fn commit(repo: &git2::Repository, message: &str) {
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents).unwrap();
}

#[test]
fn lint_message_with_issue() {
    cmd()
        .args(["lint", "--message", "feat: add login page #42"])
        .assert()
        .success()
        .stdout(contains("feat: add login page #42"));
}

#[test]
fn lint_message_without_issue() {
    cmd()
        .args(["lint", "--message", "fix: typo"])
        .assert()
        .failure()
        .stdout(contains("issue-number-required"))
        .stderr(contains("Commit lint failed"));
}

#[test]
fn lint_release_commit() {
    cmd()
        .args(["lint", "-m", "chore(main): release 2.3.0"])
        .assert()
        .success();
}

#[test]
fn lint_from_stdin() {
    cmd()
        .arg("lint")
        .write_stdin("docs: fix broken link #7\n\nDetails in the body.\n")
        .assert()
        .success();
}

#[test]
fn lint_edit_file_strips_comments() {
    let (dir, mut cmd) = workspace();
    let message = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(
        &message,
        "feat: add login page #42\n\n# Please enter the commit message for your changes.\n",
    )
    .unwrap();

    cmd.arg("lint").arg("--edit").arg(&message).assert().success();
}

#[test]
fn lint_json_output() {
    cmd()
        .args(["--format", "json", "lint", "-m", "fix: typo"])
        .assert()
        .failure()
        .stdout(contains("\"valid\": false"))
        .stdout(contains("\"code\": \"issue-number-required\""));
}

#[test]
fn lint_merge_commit_ignored() {
    cmd()
        .args(["lint", "-m", "Merge branch 'main' into feature/login"])
        .assert()
        .success()
        .stdout(contains("ignored"));
}

#[test]
fn lint_warning_strict() {
    let (dir, mut cmd) = workspace();
    let config = dir.path().join("warn.toml");
    std::fs::write(&config, "[rules.issue-number-required]\nlevel = \"warning\"\n").unwrap();

    cmd.env("ISSUELINT_CONFIG", &config)
        .args(["lint", "-m", "fix: typo"])
        .assert()
        .success();

    Command::cargo_bin("issuelint")
        .unwrap()
        .current_dir(dir.path())
        .args(["--config"])
        .arg(&config)
        .args(["lint", "--strict", "-m", "fix: typo"])
        .assert()
        .failure();
}

#[test]
fn check_commit_range() {
    let (dir, mut cmd) = workspace();
    let repo = git2::Repository::init(dir.path()).unwrap();
    commit(&repo, "feat: initial import #1");
    commit(&repo, "fix: typo");
    commit(&repo, "chore(main): release 1.0.0");

    cmd.args(["check", "HEAD~2..HEAD"])
        .assert()
        .failure()
        .stdout(contains("2 commit(s) checked, 1 failed"));
}

#[test]
fn check_range_flag_from_ref() {
    let (dir, mut cmd) = workspace();
    let repo = git2::Repository::init(dir.path()).unwrap();
    commit(&repo, "feat: initial import #1");
    commit(&repo, "fix: typo");
    commit(&repo, "docs: usage #2");

    cmd.args(["check", "HEAD~2", "--range"])
        .assert()
        .failure()
        .stdout(contains("2 commit(s) checked, 1 failed"));
}

#[test]
fn check_head() {
    let (dir, mut cmd) = workspace();
    let repo = git2::Repository::init(dir.path()).unwrap();
    commit(&repo, "feat: initial import #1");

    cmd.arg("check").assert().success();
}

#[test]
fn workflow_fixture_passes() {
    cmd()
        .arg("workflow")
        .arg(fixture("commitlint.yml"))
        .assert()
        .success()
        .stdout(contains("should checkout with fetch-depth 0"));
}

#[test]
fn workflow_fixture_fails() {
    cmd()
        .arg("workflow")
        .arg(fixture("shallow.yml"))
        .assert()
        .failure()
        .stdout(contains("should run on pull request events"))
        .stderr(contains("5 of 9 workflow checks failed"));
}

#[test]
fn workflow_missing_file() {
    cmd()
        .arg("workflow")
        .assert()
        .failure()
        .stdout(contains("workflow file should exist"));
}

#[test]
fn config_export() {
    cmd()
        .args(["config", "export"])
        .assert()
        .success()
        .stdout(contains("export default {"))
        .stdout(contains("@commitlint/config-conventional"))
        .stdout(contains("\"issue-number-required\": [2,\"always\"]"))
        .stdout(contains("\"issue-number-required\": (parsed) => {"));
}

#[test]
fn config_init_refuses_overwrite() {
    let (dir, mut cmd) = workspace();
    cmd.args(["config", "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    Command::cargo_bin("issuelint")
        .unwrap()
        .current_dir(dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(contains("Created issuelint.toml"));
}

#[test]
fn hooks_outside_repository() {
    cmd()
        .args(["hooks", "status"])
        .assert()
        .failure()
        .stderr(contains("Not a git repository"));
}

#[test]
fn hooks_install_and_status() {
    let (dir, mut cmd) = workspace();
    git2::Repository::init(dir.path()).unwrap();

    cmd.args(["hooks", "install"]).assert().success();
    assert!(dir.path().join(".git/hooks/commit-msg").exists());

    Command::cargo_bin("issuelint")
        .unwrap()
        .current_dir(dir.path())
        .args(["hooks", "status"])
        .assert()
        .success()
        .stdout(contains("commit-msg (installed)"));
}

#[test]
fn version() {
    Command::cargo_bin("issuelint")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("issuelint "));
}
