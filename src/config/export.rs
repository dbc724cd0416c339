// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Export of the rule set for an upstream commitlint harness.
//!
//! commitlint rejects rule names it cannot resolve, so every configured rule
//! outside the extended preset is exported together with a plugin that
//! implements it.

use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::error::{ConfigError, LintError, Result};
use crate::rules::builtin_rules;

use super::default::CONVENTIONAL_RULES;
use super::schema::{LintConfig, RuleSetting};

/// Render one rule as commitlint's `[level, applicability, value]` array.
///
/// Disabled rules collapse to `[0]`.
pub fn rule_to_commitlint(setting: &RuleSetting) -> Value {
    if !setting.is_enabled() {
        return json!([0]);
    }

    let mut entry = vec![json!(setting.level.code()), json!(setting.when.as_str())];
    if let Some(ref value) = setting.value {
        entry.push(json!(value));
    }
    Value::Array(entry)
}

/// The declarative part of the configuration: `extends`, `defaultIgnores`
/// and `rules`.
pub fn to_commitlint_json(config: &LintConfig) -> Value {
    let rules: Map<String, Value> = config
        .rules
        .iter()
        .map(|(name, setting)| (name.clone(), rule_to_commitlint(setting)))
        .collect();

    json!({
        "extends": config.extends,
        "defaultIgnores": config.ignores.defaults,
        "rules": rules,
    })
}

/// Plugin rule sources keyed by rule name, for every configured rule the
/// preset does not define.
pub fn plugin_rules(config: &LintConfig) -> Result<BTreeMap<String, String>> {
    let rules = builtin_rules();

    config
        .rules
        .keys()
        .filter(|name| !CONVENTIONAL_RULES.contains(&name.as_str()))
        .map(|name| {
            rules
                .iter()
                .find(|rule| rule.name() == name)
                .and_then(|rule| rule.commitlint_plugin())
                .map(|source| (name.clone(), source))
                .ok_or_else(|| LintError::Config(ConfigError::UnknownRule { name: name.clone() }))
        })
        .collect()
}

/// Render a `commitlint.config.mjs` module equivalent to the configuration.
pub fn to_commitlint_module(config: &LintConfig) -> Result<String> {
    let plugins = plugin_rules(config)?;
    let data = to_commitlint_json(config);

    let mut out = String::from("// commitlint.config.mjs\nexport default {\n");
    out.push_str(&format!("  extends: {},\n", data["extends"]));
    out.push_str(&format!("  defaultIgnores: {},\n", data["defaultIgnores"]));

    if !config.ignores.patterns.is_empty() {
        out.push_str("  ignores: [\n");
        for pattern in &config.ignores.patterns {
            out.push_str(&format!(
                "    (message) => new RegExp({}).test(message),\n",
                json!(pattern)
            ));
        }
        out.push_str("  ],\n");
    }

    out.push_str("  rules: {\n");
    if let Some(rules) = data["rules"].as_object() {
        for (name, entry) in rules {
            out.push_str(&format!("    {}: {},\n", json!(name), entry));
        }
    }
    out.push_str("  },\n");

    if !plugins.is_empty() {
        out.push_str("  plugins: [\n    {\n      rules: {\n");
        for (name, source) in &plugins {
            out.push_str(&format!("        {}: {},\n", json!(name), source));
        }
        out.push_str("      }\n    }\n  ],\n");
    }

    out.push_str("};\n");
    Ok(out)
}
