// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/config/toml_config.rs

//! # TOML Configuration
//!
//! Loads extension configuration from TOML.
//!
//! - `[application]` holds defaults shared by every extension.
//! - `[extensions."ns:name"]` holds the settings of one extension and overrides
//!   the application defaults.
//! - String values may reference the environment with `${VAR}` or
//!   `${VAR:default}`; substitution happens eagerly at load time.
//!
//! ```toml
//! [application]
//! distinct = false
//!
//! [extensions."str:tokenize"]
//! regex = "${TOKEN_DELIMITER:,}"
//! distinct = true
//! ```

use crate::core::config::config_reader::FlatConfigReader;
use crate::core::config::flat_config::{FlatConfig, PropertySource};
use crate::core::exception::{EventFluxError, EventFluxResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TomlConfig {
    pub application: Option<HashMap<String, toml::Value>>,

    /// Keyed by qualified extension name, e.g. `str:tokenize`.
    pub extensions: Option<HashMap<String, HashMap<String, toml::Value>>>,
}

/// Flatten nested TOML tables into dot-separated keys.
///
/// `[extensions."str:tokenize".cli]` with `output = "json"` becomes
/// `cli.output = "json"`. Arrays become comma-separated strings.
pub fn flatten_toml_value(
    prefix: &str,
    value: &toml::Value,
    config: &mut FlatConfig,
    source: PropertySource,
) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_toml_value(&new_prefix, val, config, source);
            }
        }
        toml::Value::String(s) => config.set(prefix, s.clone(), source),
        toml::Value::Integer(i) => config.set(prefix, i.to_string(), source),
        toml::Value::Float(f) => config.set(prefix, f.to_string(), source),
        toml::Value::Boolean(b) => config.set(prefix, b.to_string(), source),
        toml::Value::Array(arr) => {
            let str_values: Vec<String> = arr
                .iter()
                .filter_map(|v| match v {
                    toml::Value::String(s) => Some(s.clone()),
                    toml::Value::Integer(i) => Some(i.to_string()),
                    toml::Value::Float(f) => Some(f.to_string()),
                    toml::Value::Boolean(b) => Some(b.to_string()),
                    _ => {
                        log::warn!("Unsupported array element under '{prefix}', skipping");
                        None
                    }
                })
                .collect();
            config.set(prefix, str_values.join(","), source);
        }
        toml::Value::Datetime(_) => config.set(prefix, value.to_string(), source),
    }
}

static ENV_VAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::([^}]*))?\}").unwrap());

/// Substitute `${VAR}` and `${VAR:default}` placeholders from the environment.
///
/// A variable that is unset and has no default is an error naming every
/// such variable.
///
/// ```
/// use eventflux_string::core::config::toml_config::substitute_env_vars;
///
/// let result = substitute_env_vars("${EVENTFLUX_DOC_UNSET:;}").unwrap();
/// assert_eq!(result, ";");
/// assert!(substitute_env_vars("${EVENTFLUX_DOC_UNSET}").is_err());
/// ```
pub fn substitute_env_vars(value: &str) -> Result<String, String> {
    let mut missing_vars = Vec::new();
    let result = ENV_VAR_REGEX.replace_all(value, |cap: &regex::Captures<'_>| {
        match (env::var(&cap[1]), cap.get(2)) {
            (Ok(env_value), _) => env_value,
            (Err(_), Some(default)) => default.as_str().to_string(),
            (Err(_), None) => {
                missing_vars.push(cap[1].to_string());
                String::new()
            }
        }
    });

    if !missing_vars.is_empty() {
        return Err(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        ));
    }
    Ok(result.into_owned())
}

pub fn substitute_toml_env_vars(value: &mut toml::Value) -> Result<(), String> {
    match value {
        toml::Value::String(s) => *s = substitute_env_vars(s)?,
        toml::Value::Table(table) => {
            for (_, val) in table.iter_mut() {
                substitute_toml_env_vars(val)?;
            }
        }
        toml::Value::Array(arr) => {
            for val in arr.iter_mut() {
                substitute_toml_env_vars(val)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Merged per-extension configuration.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub application: FlatConfig,
    pub extensions: HashMap<String, FlatConfig>,
}

impl LoadedConfig {
    /// Reader for `qualified_name`. Extensions without their own section see
    /// the application defaults.
    pub fn reader_for(&self, qualified_name: &str) -> FlatConfigReader {
        let config = self
            .extensions
            .get(qualified_name)
            .cloned()
            .unwrap_or_else(|| self.application.clone());
        FlatConfigReader::new(config)
    }
}

/// Parse TOML text into per-extension configurations.
pub fn parse_toml_config(toml_str: &str) -> EventFluxResult<LoadedConfig> {
    let mut toml_config: TomlConfig = toml::from_str(toml_str)
        .map_err(|e| EventFluxError::configuration(format!("Failed to parse TOML: {e}")))?;

    let sections = toml_config
        .application
        .iter_mut()
        .chain(toml_config.extensions.iter_mut().flat_map(|e| e.values_mut()));
    for section in sections {
        for value in section.values_mut() {
            substitute_toml_env_vars(value).map_err(EventFluxError::configuration)?;
        }
    }

    let mut application = FlatConfig::new();
    for (key, value) in toml_config.application.iter().flatten() {
        flatten_toml_value(key, value, &mut application, PropertySource::TomlApplication);
    }

    let mut extensions = HashMap::new();
    for (name, section) in toml_config.extensions.unwrap_or_default() {
        if !name.contains(crate::core::util::eventflux_constants::EXTENSION_SEPARATOR) {
            return Err(EventFluxError::configuration(format!(
                "Extension section '{name}' must be named 'namespace:name'"
            )));
        }
        let mut flat_config = application.clone();
        for (key, value) in &section {
            flatten_toml_value(key, value, &mut flat_config, PropertySource::TomlExtension);
        }
        extensions.insert(name, flat_config);
    }

    Ok(LoadedConfig {
        application,
        extensions,
    })
}

/// Read and parse a TOML configuration file.
pub fn load_toml_config(toml_path: impl AsRef<Path>) -> EventFluxResult<LoadedConfig> {
    let toml_path = toml_path.as_ref();
    let toml_str = std::fs::read_to_string(toml_path).map_err(|e| {
        EventFluxError::configuration(format!(
            "Failed to read TOML file '{}': {e}",
            toml_path.display()
        ))
    })?;
    parse_toml_config(&toml_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::config_reader::ConfigReader;

    #[test]
    fn test_flatten_toml_value_nested_table() {
        let value: toml::Value = toml::from_str(
            r#"
            [cli]
            output = "json"
            fields = ["id", "token"]
        "#,
        )
        .unwrap();
        let mut config = FlatConfig::new();
        flatten_toml_value("", &value, &mut config, PropertySource::TomlExtension);

        assert_eq!(config.get("cli.output"), Some(&"json".to_string()));
        assert_eq!(config.get("cli.fields"), Some(&"id,token".to_string()));
    }

    #[test]
    fn test_env_var_substitution_with_default() {
        let result = substitute_env_vars("${EVENTFLUX_UNIT_MISSING:\\s+}").unwrap();
        assert_eq!(result, "\\s+");
    }

    #[test]
    fn test_env_var_substitution_missing_no_default() {
        let err = substitute_env_vars("${EVENTFLUX_A_MISSING}-${EVENTFLUX_B_MISSING}").unwrap_err();
        assert_eq!(
            err,
            "Missing required environment variables: EVENTFLUX_A_MISSING, EVENTFLUX_B_MISSING"
        );
    }

    #[test]
    fn test_extension_overrides_application() {
        let loaded = parse_toml_config(
            r#"
[application]
regex = ","
distinct = false

[extensions."str:tokenize"]
distinct = true
"#,
        )
        .unwrap();

        let reader = loaded.reader_for("str:tokenize");
        assert_eq!(reader.read_config("regex", ";"), ",");
        assert_eq!(reader.read_config("distinct", "false"), "true");

        let other = loaded.reader_for("str:other");
        assert_eq!(other.read_config("distinct", "x"), "false");
    }

    #[test]
    fn test_unqualified_extension_section_rejected() {
        let err = parse_toml_config("[extensions.tokenize]\nregex = \",\"\n").unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("namespace:name"));
    }

    #[test]
    fn test_malformed_toml_is_configuration_error() {
        let err = parse_toml_config("[extensions\n").unwrap_err();
        assert!(matches!(err, EventFluxError::Configuration { .. }));
    }
}
