// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/config/eventflux_context.rs
// Corresponds to io.eventflux.core.config.EventFluxContext
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::core::config::config_reader::FlatConfigReader;
use crate::core::config::toml_config::LoadedConfig;
use crate::core::exception::{EventFluxError, EventFluxResult};
use crate::core::extension::StreamProcessorFactory;

/// Shared context for all EventFlux apps of one manager: the extension
/// registry and the extension configuration.
///
/// Clones share the same registry.
#[derive(Clone)]
pub struct EventFluxContext {
    /// Keyed by qualified name, e.g. `str:tokenize`.
    stream_processor_factories: Arc<RwLock<HashMap<String, Box<dyn StreamProcessorFactory>>>>,
    extension_configs: Arc<RwLock<LoadedConfig>>,
}

impl EventFluxContext {
    /// Context with the built-in extensions registered.
    pub fn new() -> Self {
        let ctx = Self::empty();
        crate::register_extensions(&ctx);
        ctx
    }

    /// Context with nothing registered.
    pub fn empty() -> Self {
        Self {
            stream_processor_factories: Arc::new(RwLock::new(HashMap::new())),
            extension_configs: Arc::new(RwLock::new(LoadedConfig::default())),
        }
    }

    /// Register `factory` under its qualified name, replacing any previous one.
    pub fn add_stream_processor_factory(&self, factory: Box<dyn StreamProcessorFactory>) {
        let name = factory.qualified_name();
        log::debug!("Registering stream processor extension '{name}'");
        self.stream_processor_factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, factory);
    }

    pub fn get_stream_processor_factory(
        &self,
        qualified_name: &str,
    ) -> EventFluxResult<Box<dyn StreamProcessorFactory>> {
        self.stream_processor_factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(qualified_name)
            .map(|f| f.clone_box())
            .ok_or_else(|| EventFluxError::extension_not_found("stream processor", qualified_name))
    }

    /// Qualified names of all registered stream processors, sorted.
    pub fn list_stream_processor_factories(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .stream_processor_factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn set_extension_configs(&self, configs: LoadedConfig) {
        *self
            .extension_configs
            .write()
            .unwrap_or_else(PoisonError::into_inner) = configs;
    }

    /// Config reader for the extension registered as `qualified_name`.
    pub fn get_config_reader(&self, qualified_name: &str) -> FlatConfigReader {
        self.extension_configs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reader_for(qualified_name)
    }
}

impl Default for EventFluxContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventFluxContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventFluxContext")
            .field(
                "stream_processor_factories",
                &self.list_stream_processor_factories(),
            )
            .finish_non_exhaustive()
    }
}
