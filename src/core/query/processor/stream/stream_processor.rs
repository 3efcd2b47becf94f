// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/processor/stream/stream_processor.rs
// Corresponds to io.eventflux.core.query.processor.stream.StreamProcessor

use crate::core::config::config_reader::ConfigReader;
use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::event::complex_event::ComplexEvent;
use crate::core::event::stream::{ComplexEventPopulater, StreamEventCloner};
use crate::core::exception::EventFluxResult;
use crate::core::executor::ExpressionArgument;
use crate::core::persistence::ProcessorState;
use crate::core::query::processor::Processor;
use crate::query_api::definition::{Attribute, StreamDefinition};
use std::fmt::Debug;
use std::sync::Arc;

/// An extension that turns each incoming stream event into zero or more
/// outgoing events carrying extra attributes.
///
/// The host calls [`init`](StreamProcessor::init) once, then
/// [`start`](StreamProcessor::start), then `process` for every chunk until
/// [`stop`](StreamProcessor::stop). Snapshot and restore may be called at any
/// point after `init`.
pub trait StreamProcessor: Debug + Send + Sync {
    /// Validate the query arguments and return the attributes appended to
    /// every outgoing event, in order.
    fn init(
        &mut self,
        input_definition: &StreamDefinition,
        arguments: Vec<ExpressionArgument>,
        config_reader: &dyn ConfigReader,
        eventflux_app_context: &Arc<EventFluxAppContext>,
    ) -> EventFluxResult<Vec<Attribute>>;

    /// Process the chunk starting at `stream_event_chunk`.
    ///
    /// Outgoing events are built with `cloner` and `populater` and handed to
    /// `next_processor` one at a time. Input events are not modified.
    fn process(
        &self,
        stream_event_chunk: &dyn ComplexEvent,
        next_processor: &dyn Processor,
        cloner: &StreamEventCloner,
        populater: &dyn ComplexEventPopulater,
    ) -> EventFluxResult<()>;

    fn start(&mut self);

    fn stop(&mut self);

    /// State to persist, or `None` when there is nothing to save.
    fn current_state(&self) -> Option<ProcessorState>;

    fn restore_state(&mut self, state: ProcessorState) -> EventFluxResult<()>;
}
