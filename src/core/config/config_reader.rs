// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/config/config_reader.rs
// Corresponds to io.eventflux.core.util.config.ConfigReader

use super::flat_config::FlatConfig;
use std::collections::HashMap;
use std::fmt::Debug;

/// Read access to the configuration of a single extension.
pub trait ConfigReader: Debug + Send + Sync {
    /// Value of `name`, or `default_value` when it is not configured.
    fn read_config(&self, name: &str, default_value: &str) -> String;

    fn get_all_configs(&self) -> HashMap<String, String>;
}

/// [`ConfigReader`] over the merged [`FlatConfig`] of one extension.
#[derive(Debug, Clone, Default)]
pub struct FlatConfigReader {
    config: FlatConfig,
}

impl FlatConfigReader {
    pub fn new(config: FlatConfig) -> Self {
        Self { config }
    }

    /// Reader with nothing configured; every lookup yields its default.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn flat_config(&self) -> &FlatConfig {
        &self.config
    }
}

impl ConfigReader for FlatConfigReader {
    fn read_config(&self, name: &str, default_value: &str) -> String {
        self.config
            .get(name)
            .cloned()
            .unwrap_or_else(|| default_value.to_string())
    }

    fn get_all_configs(&self) -> HashMap<String, String> {
        self.config.properties().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::flat_config::PropertySource;

    #[test]
    fn test_read_config_falls_back_to_default() {
        let mut config = FlatConfig::new();
        config.set("regex", "\\s+", PropertySource::TomlExtension);
        let reader = FlatConfigReader::new(config);

        assert_eq!(reader.read_config("regex", ","), "\\s+");
        assert_eq!(reader.read_config("distinct", "false"), "false");
        assert_eq!(reader.get_all_configs().len(), 1);
        assert!(FlatConfigReader::empty().get_all_configs().is_empty());
    }
}
