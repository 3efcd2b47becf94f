// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/processor/stream/stream_processor_runtime.rs
// Plays the role of io.eventflux.core.query.processor.stream.AbstractStreamProcessor

use super::stream_processor::StreamProcessor;
use crate::core::config::config_reader::ConfigReader;
use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::config::eventflux_query_context::EventFluxQueryContext;
use crate::core::event::complex_event::ComplexEvent;
use crate::core::event::stream::{
    construct_event_populator, MetaStreamEvent, SelectiveComplexEventPopulater, StreamEventCloner,
};
use crate::core::exception::EventFluxResult;
use crate::core::executor::ExpressionArgument;
use crate::core::persistence::{component_id, ComponentId, ProcessorState};
use crate::core::query::processor::{CommonProcessorMeta, ProcessingMode, Processor};
use crate::core::util::eventflux_constants::STREAM_EVENT_CHAIN_INDEX;
use crate::query_api::definition::{Attribute, StreamDefinition};
use std::sync::{Arc, Mutex, PoisonError};

/// Hosts a [`StreamProcessor`] inside a query's processor chain.
///
/// Construction runs `init`, lays out the outgoing events (input attributes
/// followed by the returned attributes) and prepares the cloner and populater
/// handed to every `process` call.
#[derive(Debug)]
pub struct StreamProcessorRuntime {
    meta: CommonProcessorMeta,
    extension_name: String,
    stream_processor: Box<dyn StreamProcessor>,
    output_meta: MetaStreamEvent,
    returned_attributes: Vec<Attribute>,
    cloner: StreamEventCloner,
    populater: SelectiveComplexEventPopulater,
}

impl StreamProcessorRuntime {
    pub fn new(
        extension_name: impl Into<String>,
        mut stream_processor: Box<dyn StreamProcessor>,
        input_definition: Arc<StreamDefinition>,
        arguments: Vec<ExpressionArgument>,
        config_reader: &dyn ConfigReader,
        eventflux_query_context: Arc<EventFluxQueryContext>,
    ) -> EventFluxResult<Self> {
        let app_context = eventflux_query_context.get_eventflux_app_context();
        let returned_attributes =
            stream_processor.init(&input_definition, arguments, config_reader, &app_context)?;

        let mut output_meta = MetaStreamEvent::new_for_single_input(Arc::clone(&input_definition));
        for attribute in &returned_attributes {
            output_meta.add_output_data_allowing_duplicate(attribute.clone());
        }
        output_meta.set_output_definition(
            input_definition.with_appended_attributes(&returned_attributes),
        );

        let cloner = StreamEventCloner::from_meta(&output_meta);
        let populater = construct_event_populator(
            &output_meta,
            STREAM_EVENT_CHAIN_INDEX as i32,
            &returned_attributes,
        );

        Ok(Self {
            meta: CommonProcessorMeta::new(app_context, eventflux_query_context),
            extension_name: extension_name.into(),
            stream_processor,
            output_meta,
            returned_attributes,
            cloner,
            populater,
        })
    }

    /// Look up `qualified_name` in the app's extension registry and host a
    /// fresh instance configured from the extension's config section.
    pub fn for_extension(
        qualified_name: &str,
        input_definition: Arc<StreamDefinition>,
        arguments: Vec<ExpressionArgument>,
        eventflux_query_context: Arc<EventFluxQueryContext>,
    ) -> EventFluxResult<Self> {
        let context = eventflux_query_context
            .get_eventflux_app_context()
            .get_eventflux_context();
        let factory = context.get_stream_processor_factory(qualified_name)?;
        let config_reader = context.get_config_reader(qualified_name);
        Self::new(
            qualified_name,
            factory.create(),
            input_definition,
            arguments,
            &config_reader,
            eventflux_query_context,
        )
    }

    pub fn get_output_definition(&self) -> Option<&Arc<StreamDefinition>> {
        self.output_meta.get_output_stream_definition()
    }

    pub fn get_returned_attributes(&self) -> &[Attribute] {
        &self.returned_attributes
    }

    /// Id under which this processor's state is persisted.
    pub fn component_id(&self) -> ComponentId {
        component_id(&self.meta.query_name, &self.extension_name)
    }

    pub fn start(&mut self) {
        self.stream_processor.start();
    }

    pub fn stop(&mut self) {
        self.stream_processor.stop();
    }

    pub fn snapshot(&self) -> Option<ProcessorState> {
        self.stream_processor.current_state()
    }

    pub fn restore(&mut self, state: ProcessorState) -> EventFluxResult<()> {
        self.stream_processor.restore_state(state)
    }
}

impl Processor for StreamProcessorRuntime {
    fn process(&self, complex_event_chunk: Option<Box<dyn ComplexEvent>>) -> EventFluxResult<()> {
        let Some(chunk) = complex_event_chunk else {
            return Ok(());
        };
        let Some(next) = self.meta.next_processor.as_ref() else {
            log::trace!(
                "{} has no next processor, dropping chunk",
                self.component_id()
            );
            return Ok(());
        };
        let next = next.lock().unwrap_or_else(PoisonError::into_inner);
        self.stream_processor
            .process(chunk.as_ref(), &*next, &self.cloner, &self.populater)
            .inspect_err(|e| log::error!("{} failed: {e}", self.component_id()))
    }

    fn next_processor(&self) -> Option<Arc<Mutex<dyn Processor>>> {
        self.meta.next_processor.as_ref().map(Arc::clone)
    }

    fn set_next_processor(&mut self, next_processor: Option<Arc<Mutex<dyn Processor>>>) {
        self.meta.next_processor = next_processor;
    }

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
        self.stream_processor.current_state().is_some()
    }
}
