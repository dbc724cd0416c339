// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Checks that the CI workflow running the linter has the expected shape.

mod checks;
mod report;

pub use checks::{check_workflow, check_workflow_file, parse_workflow};
pub use report::{WorkflowCheck, WorkflowReport};
