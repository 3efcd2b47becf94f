// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/processor/mod.rs

use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::config::eventflux_query_context::EventFluxQueryContext;
use crate::core::event::complex_event::ComplexEvent;
use crate::core::exception::EventFluxResult;

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessingMode {
    #[default]
    DEFAULT,
    SLIDE,
    BATCH,
}

/// Common metadata for Processors.
#[derive(Debug, Clone)]
pub struct CommonProcessorMeta {
    pub eventflux_app_context: Arc<EventFluxAppContext>,
    pub eventflux_query_context: Arc<EventFluxQueryContext>,
    pub query_name: String,
    pub next_processor: Option<Arc<Mutex<dyn Processor>>>,
}

impl CommonProcessorMeta {
    pub fn new(
        app_context: Arc<EventFluxAppContext>,
        query_context: Arc<EventFluxQueryContext>,
    ) -> Self {
        Self {
            eventflux_app_context: app_context,
            query_name: query_context.name.clone(),
            eventflux_query_context: query_context,
            next_processor: None,
        }
    }

    pub fn get_eventflux_query_context(&self) -> Arc<EventFluxQueryContext> {
        Arc::clone(&self.eventflux_query_context)
    }
}

/// A stage of a query: receives event chunks and forwards results downstream.
///
/// Errors returned from `process` abort the chunk and travel back up the
/// chain to whoever fed it.
pub trait Processor: Debug + Send + Sync {
    fn process(&self, complex_event_chunk: Option<Box<dyn ComplexEvent>>) -> EventFluxResult<()>;
    fn next_processor(&self) -> Option<Arc<Mutex<dyn Processor>>>;
    fn set_next_processor(&mut self, next_processor: Option<Arc<Mutex<dyn Processor>>>);
    fn get_eventflux_app_context(&self) -> Arc<EventFluxAppContext>;
    fn get_eventflux_query_context(&self) -> Arc<EventFluxQueryContext>;
    fn get_processing_mode(&self) -> ProcessingMode;
    fn is_stateful(&self) -> bool;
}

pub mod stream;

pub use self::stream::{StreamProcessor, StreamProcessorRuntime};
