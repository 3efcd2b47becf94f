// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/config/eventflux_app_context.rs
// Corresponds to io.eventflux.core.config.EventFluxAppContext
use super::eventflux_context::EventFluxContext;
use std::sync::Arc;

/// Context of one running EventFlux app.
#[derive(Debug, Clone)]
pub struct EventFluxAppContext {
    pub name: String,
    pub eventflux_context: Arc<EventFluxContext>,
}

impl EventFluxAppContext {
    pub fn new(eventflux_context: Arc<EventFluxContext>, name: String) -> Self {
        Self {
            name,
            eventflux_context,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_eventflux_context(&self) -> Arc<EventFluxContext> {
        Arc::clone(&self.eventflux_context)
    }

    /// App named `test_app` over a fresh context with the built-in extensions.
    pub fn default_for_testing() -> Self {
        Self::new(Arc::new(EventFluxContext::new()), "test_app".to_string())
    }
}
