// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for issuelint.
//!
//! This module handles loading, parsing, and merging the rule set from
//! issuelint.toml, and exporting it for an upstream commitlint harness.

pub mod default;
mod export;
mod loader;
mod schema;

pub use default::{default_config, CONVENTIONAL_RULES, HEADER_MAX_LENGTH_RULE, ISSUE_NUMBER_RULE};
pub use export::{
    plugin_rules, rule_to_commitlint, to_commitlint_json, to_commitlint_module,
};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, merge_configs,
    parse_config,
};
pub use schema::*;
