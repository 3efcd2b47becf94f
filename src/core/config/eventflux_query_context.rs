// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/config/eventflux_query_context.rs
// Corresponds to io.eventflux.core.config.EventFluxQueryContext
use super::eventflux_app_context::EventFluxAppContext;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EventFluxQueryContext {
    pub eventflux_app_context: Arc<EventFluxAppContext>,
    pub name: String,
}

impl EventFluxQueryContext {
    pub fn new(eventflux_app_context: Arc<EventFluxAppContext>, name: String) -> Self {
        Self {
            eventflux_app_context,
            name,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_eventflux_app_context(&self) -> Arc<EventFluxAppContext> {
        Arc::clone(&self.eventflux_app_context)
    }
}
