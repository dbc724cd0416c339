// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structural checks over a parsed workflow document.
//!
//! Only presence and values of the fields the linter depends on are checked;
//! this is not a schema validator.

use serde_yaml::Value as YamlValue;
use std::path::Path;

use crate::config::WorkflowConfig;
use crate::error::{Result, WorkflowError};

use super::report::{WorkflowCheck, WorkflowReport};

pub const FILE_EXISTS: &str = "workflow file should exist";
pub const PERMISSIONS_BLOCK: &str = "should have permissions block";
pub const PULL_REQUEST_TRIGGER: &str = "should run on pull request events";

/// Load a workflow file and run every check against it.
///
/// A missing file yields a report with a single failed check rather than an
/// error, since absence is itself a finding.
pub fn check_workflow_file(path: &Path, expected: &WorkflowConfig) -> Result<WorkflowReport> {
    let mut report = WorkflowReport::new(path);

    if !path.exists() {
        report
            .checks
            .push(WorkflowCheck::fail(FILE_EXISTS, format!("{} not found", path.display())));
        return Ok(report);
    }
    report.checks.push(WorkflowCheck::pass(FILE_EXISTS));

    tracing::debug!("Loading workflow from: {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| WorkflowError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let document = parse_workflow(path, &content)?;

    report.checks.extend(check_workflow(&document, expected));
    Ok(report)
}

/// Parse workflow YAML.
pub fn parse_workflow(path: &Path, content: &str) -> Result<YamlValue> {
    serde_yaml::from_str(content).map_err(|e| {
        WorkflowError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Run every structural check against a parsed document.
pub fn check_workflow(doc: &YamlValue, expected: &WorkflowConfig) -> Vec<WorkflowCheck> {
    let mut checks = vec![check_permissions_block(doc)];
    checks.extend(
        expected
            .permissions
            .iter()
            .map(|(scope, access)| check_permission(doc, scope, access)),
    );
    checks.push(check_job_defined(doc, &expected.job));
    checks.push(check_pull_request_trigger(doc, &expected.pull_request_types));
    checks.push(check_runner(doc, &expected.job, &expected.runner));
    checks.push(check_checkout_step(
        doc,
        &expected.job,
        &expected.checkout_action,
        expected.fetch_depth,
    ));
    checks.push(check_lint_step(
        doc,
        &expected.job,
        &expected.lint_action,
        &expected.lint_config_file,
    ));
    checks
}

fn check_permissions_block(doc: &YamlValue) -> WorkflowCheck {
    let permissions = doc.get("permissions");
    WorkflowCheck::expect(
        PERMISSIONS_BLOCK,
        permissions.map(YamlValue::is_mapping).unwrap_or(false),
        || format!("permissions is {}", describe(permissions)),
    )
}

fn check_permission(doc: &YamlValue, scope: &str, access: &str) -> WorkflowCheck {
    let actual = doc.get("permissions").and_then(|p| p.get(scope));
    WorkflowCheck::expect(
        format!("permissions should include {} {} access", scope, access),
        actual.and_then(YamlValue::as_str) == Some(access),
        || format!("permissions.{} is {}", scope, describe(actual)),
    )
}

fn check_job_defined(doc: &YamlValue, job: &str) -> WorkflowCheck {
    WorkflowCheck::expect(
        format!("should have {} job", job),
        job_of(doc, job).is_some(),
        || format!("jobs.{} is missing", job),
    )
}

fn check_pull_request_trigger(doc: &YamlValue, types: &[String]) -> WorkflowCheck {
    let trigger = match doc.get("on").and_then(|on| on.get("pull_request")) {
        Some(trigger) => trigger,
        None => return WorkflowCheck::fail(PULL_REQUEST_TRIGGER, "on.pull_request is missing"),
    };

    let declared: Vec<&str> = trigger
        .get("types")
        .and_then(YamlValue::as_sequence)
        .map(|seq| seq.iter().filter_map(YamlValue::as_str).collect())
        .unwrap_or_default();
    let missing: Vec<&str> = types
        .iter()
        .map(String::as_str)
        .filter(|t| !declared.contains(t))
        .collect();

    WorkflowCheck::expect(PULL_REQUEST_TRIGGER, missing.is_empty(), || {
        format!("on.pull_request.types is missing {}", missing.join(", "))
    })
}

fn check_runner(doc: &YamlValue, job: &str, runner: &str) -> WorkflowCheck {
    let actual = job_of(doc, job).and_then(|j| j.get("runs-on"));
    WorkflowCheck::expect(
        format!("should use {} runner", runner),
        actual.and_then(YamlValue::as_str) == Some(runner),
        || format!("jobs.{}.runs-on is {}", job, describe(actual)),
    )
}

fn check_checkout_step(doc: &YamlValue, job: &str, action: &str, fetch_depth: u64) -> WorkflowCheck {
    let name = format!("should checkout with fetch-depth {}", fetch_depth);
    let step = match step_using(doc, job, action) {
        Some(step) => step,
        None => return WorkflowCheck::fail(name, format!("no step uses {}", action)),
    };

    // A quoted "0" is a string and does not count.
    let actual = input_of(step, "fetch-depth");
    WorkflowCheck::expect(
        name,
        actual.and_then(YamlValue::as_u64) == Some(fetch_depth),
        || format!("with.fetch-depth is {}", describe(actual)),
    )
}

fn check_lint_step(doc: &YamlValue, job: &str, action: &str, config_file: &str) -> WorkflowCheck {
    let name = format!("should use {}", action);
    let step = match step_using(doc, job, action) {
        Some(step) => step,
        None => return WorkflowCheck::fail(name, format!("no step uses {}", action)),
    };

    let actual = input_of(step, "configFile");
    WorkflowCheck::expect(
        name,
        actual.and_then(YamlValue::as_str) == Some(config_file),
        || format!("with.configFile is {}", describe(actual)),
    )
}

fn job_of<'a>(doc: &'a YamlValue, job: &str) -> Option<&'a YamlValue> {
    doc.get("jobs")
        .and_then(|jobs| jobs.get(job))
        .filter(|j| !j.is_null())
}

fn step_using<'a>(doc: &'a YamlValue, job: &str, action: &str) -> Option<&'a YamlValue> {
    job_of(doc, job)?
        .get("steps")
        .and_then(YamlValue::as_sequence)?
        .iter()
        .find(|step| step.get("uses").and_then(YamlValue::as_str) == Some(action))
}

fn input_of<'a>(step: &'a YamlValue, input: &str) -> Option<&'a YamlValue> {
    step.get("with").and_then(|with| with.get(input))
}

fn describe(value: Option<&YamlValue>) -> String {
    match value {
        None | Some(YamlValue::Null) => "missing".to_string(),
        Some(YamlValue::String(s)) => format!("\"{}\"", s),
        Some(other) => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unreadable".to_string()),
    }
}
