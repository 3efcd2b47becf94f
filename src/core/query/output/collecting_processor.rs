// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/output/collecting_processor.rs
use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::config::eventflux_query_context::EventFluxQueryContext;
use crate::core::event::complex_event::{chunk_iter, ComplexEvent};
use crate::core::event::event::Event;
use crate::core::exception::EventFluxResult;
use crate::core::query::processor::{CommonProcessorMeta, ProcessingMode, Processor};
use std::sync::{Arc, Mutex, PoisonError};

/// Terminal processor that records every event it receives as an [`Event`].
///
/// Each received chunk is recorded separately so callers can check how events
/// were grouped.
#[derive(Debug)]
pub struct CollectingProcessor {
    meta: CommonProcessorMeta,
    chunks: Arc<Mutex<Vec<Vec<Event>>>>,
}

impl CollectingProcessor {
    pub fn new(
        app_ctx: Arc<EventFluxAppContext>,
        query_ctx: Arc<EventFluxQueryContext>,
    ) -> Self {
        Self {
            meta: CommonProcessorMeta::new(app_ctx, query_ctx),
            chunks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded chunks that stays valid after the processor is
    /// moved into a chain.
    pub fn chunks_handle(&self) -> Arc<Mutex<Vec<Vec<Event>>>> {
        Arc::clone(&self.chunks)
    }

    pub fn chunks(&self) -> Vec<Vec<Event>> {
        self.chunks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All recorded events in arrival order.
    pub fn events(&self) -> Vec<Event> {
        self.chunks().into_iter().flatten().collect()
    }
}

impl Processor for CollectingProcessor {
    fn process(&self, complex_event_chunk: Option<Box<dyn ComplexEvent>>) -> EventFluxResult<()> {
        let Some(head) = complex_event_chunk else {
            return Ok(());
        };
        let events: Vec<Event> = chunk_iter(head.as_ref()).map(Event::from_complex).collect();
        self.chunks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(events);
        Ok(())
    }

    fn next_processor(&self) -> Option<Arc<Mutex<dyn Processor>>> {
        None
    }

    fn set_next_processor(&mut self, _next: Option<Arc<Mutex<dyn Processor>>>) {}

    fn get_eventflux_app_context(&self) -> Arc<EventFluxAppContext> {
        Arc::clone(&self.meta.eventflux_app_context)
    }

    fn get_eventflux_query_context(&self) -> Arc<EventFluxQueryContext> {
        self.meta.get_eventflux_query_context()
    }

    fn get_processing_mode(&self) -> ProcessingMode {
        ProcessingMode::DEFAULT
    }

    fn is_stateful(&self) -> bool {
        false
    }
}
