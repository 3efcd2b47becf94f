// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/config/flat_config.rs

//! # Flat Configuration
//!
//! Extension properties are resolved from several layers and merged by
//! priority into one flat, dot-separated key space.
//!
//! ## Property Sources (Priority: Low to High)
//!
//! 1. **RustDefault** - defaults baked into the extension
//! 2. **TomlApplication** - TOML `[application]` section, shared by every extension
//! 3. **TomlExtension** - TOML `[extensions."ns:name"]` section
//!
//! ```
//! use eventflux_string::core::config::flat_config::{FlatConfig, PropertySource};
//!
//! let mut config = FlatConfig::new();
//! config.set("regex", ",", PropertySource::TomlApplication);
//! config.set("regex", ";", PropertySource::RustDefault);
//! assert_eq!(config.get("regex").map(String::as_str), Some(","));
//! ```

use std::collections::HashMap;

/// Where a property came from. Higher priority sources win on merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySource {
    RustDefault,
    TomlApplication,
    TomlExtension,
}

impl PropertySource {
    #[inline]
    pub const fn priority(&self) -> u8 {
        match self {
            PropertySource::RustDefault => 0,
            PropertySource::TomlApplication => 1,
            PropertySource::TomlExtension => 2,
        }
    }
}

/// Flat key-value configuration with source tracking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatConfig {
    properties: HashMap<String, String>,
    sources: HashMap<String, PropertySource>,
}

impl FlatConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property unless it is already held by a strictly higher priority source.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        source: PropertySource,
    ) {
        let key = key.into();
        if let Some(existing) = self.sources.get(&key) {
            if existing.priority() > source.priority() {
                return;
            }
        }
        self.properties.insert(key.clone(), value.into());
        self.sources.insert(key, source);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }

    #[inline]
    pub fn get_with_source(&self, key: &str) -> Option<(&String, PropertySource)> {
        self.properties
            .get(key)
            .and_then(|value| self.sources.get(key).map(|source| (value, *source)))
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    #[inline]
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Merge `other` into this configuration, respecting priorities.
    pub fn merge(&mut self, other: &FlatConfig) {
        for (key, value) in &other.properties {
            if let Some(source) = other.sources.get(key) {
                self.set(key.clone(), value.clone(), *source);
            }
        }
    }

    /// Properties under `prefix`, with the prefix stripped from the keys.
    pub fn get_properties_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a String)> + 'a {
        self.properties
            .iter()
            .filter_map(move |(key, value)| key.strip_prefix(prefix).map(|k| (k, value)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_source_priority_ordering() {
        assert!(PropertySource::RustDefault.priority() < PropertySource::TomlApplication.priority());
        assert!(
            PropertySource::TomlApplication.priority() < PropertySource::TomlExtension.priority()
        );
    }

    #[test]
    fn test_flat_config_priority_override() {
        let mut config = FlatConfig::new();
        config.set("distinct", "false", PropertySource::TomlApplication);
        config.set("distinct", "true", PropertySource::TomlExtension);

        assert_eq!(
            config.get_with_source("distinct"),
            Some((&"true".to_string(), PropertySource::TomlExtension))
        );
    }

    #[test]
    fn test_flat_config_priority_no_override() {
        let mut config = FlatConfig::new();
        config.set("regex", "\\s+", PropertySource::TomlExtension);
        config.set("regex", ",", PropertySource::TomlApplication);

        assert_eq!(config.get("regex"), Some(&"\\s+".to_string()));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_flat_config_merge() {
        let mut base = FlatConfig::new();
        base.set("regex", ",", PropertySource::TomlApplication);
        base.set("distinct", "false", PropertySource::TomlApplication);

        let mut ext = FlatConfig::new();
        ext.set("distinct", "true", PropertySource::TomlExtension);
        base.merge(&ext);

        assert_eq!(base.get("regex"), Some(&",".to_string()));
        assert_eq!(base.get("distinct"), Some(&"true".to_string()));
    }

    #[test]
    fn test_flat_config_prefix_filtering() {
        let mut config = FlatConfig::new();
        config.set("cli.output", "json", PropertySource::TomlExtension);
        config.set("regex", ",", PropertySource::TomlExtension);

        let cli: Vec<_> = config.get_properties_with_prefix("cli.").collect();
        assert_eq!(cli, vec![("output", &"json".to_string())]);
        assert!(!config.is_empty());
        assert!(config.contains("regex"));
    }
}
