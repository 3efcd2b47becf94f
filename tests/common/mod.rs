// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code)]

use eventflux_string::core::config::{EventFluxAppContext, EventFluxQueryContext};
use eventflux_string::core::event::event::{to_stream_event_chunk, Event};
use eventflux_string::core::event::stream::MetaStreamEvent;
use eventflux_string::core::event::value::AttributeValue;
use eventflux_string::core::exception::EventFluxResult;
use eventflux_string::core::executor::{ExpressionArgument, VariableExpressionExecutor};
use eventflux_string::core::query::{CollectingProcessor, Processor};
use eventflux_string::core::StreamProcessorRuntime;
use eventflux_string::query_api::definition::{attribute::Type as AttrType, StreamDefinition};
use std::sync::{Arc, Mutex};

/// `inputStream (id int, str string)`
pub fn input_definition() -> Arc<StreamDefinition> {
    Arc::new(
        StreamDefinition::new("inputStream".to_string())
            .attribute("id".to_string(), AttrType::INT)
            .attribute("str".to_string(), AttrType::STRING),
    )
}

/// Reads the `str` attribute of `inputStream`.
pub fn source() -> ExpressionArgument {
    let meta = MetaStreamEvent::new_for_single_input(input_definition());
    let executor = VariableExpressionExecutor::for_attribute(&meta, "str")
        .expect("inputStream defines str");
    ExpressionArgument::dynamic(executor)
}

pub fn string_arg(value: &str) -> ExpressionArgument {
    ExpressionArgument::constant(AttributeValue::from(value), AttrType::STRING)
}

pub fn bool_arg(value: bool) -> ExpressionArgument {
    ExpressionArgument::constant(AttributeValue::Bool(value), AttrType::BOOL)
}

pub fn query_context() -> Arc<EventFluxQueryContext> {
    let app_ctx = Arc::new(EventFluxAppContext::default_for_testing());
    Arc::new(EventFluxQueryContext::new(app_ctx, "query1".to_string()))
}

/// Runs `inputStream#str:tokenize(...)` into a collecting sink.
#[derive(Debug)]
pub struct TokenizeRunner {
    pub runtime: StreamProcessorRuntime,
    pub collected: Arc<Mutex<Vec<Vec<Event>>>>,
}

impl TokenizeRunner {
    pub fn try_new(arguments: Vec<ExpressionArgument>) -> EventFluxResult<Self> {
        let query_ctx = query_context();
        let mut runtime = StreamProcessorRuntime::for_extension(
            "str:tokenize",
            input_definition(),
            arguments,
            Arc::clone(&query_ctx),
        )?;
        let sink = CollectingProcessor::new(query_ctx.get_eventflux_app_context(), query_ctx);
        let collected = sink.chunks_handle();
        runtime.set_next_processor(Some(Arc::new(Mutex::new(sink))));
        runtime.start();
        Ok(Self { runtime, collected })
    }

    pub fn new(regex: &str) -> Self {
        Self::try_new(vec![source(), string_arg(regex)]).expect("valid str:tokenize arguments")
    }

    pub fn distinct(regex: &str, distinct: bool) -> Self {
        Self::try_new(vec![source(), string_arg(regex), bool_arg(distinct)])
            .expect("valid str:tokenize arguments")
    }

    /// Send one chunk holding one event per `(id, str)` row.
    pub fn send_batch(&self, rows: &[(i32, AttributeValue)]) -> EventFluxResult<()> {
        let events: Vec<Event> = rows
            .iter()
            .enumerate()
            .map(|(ts, (id, text))| {
                Event::new_with_data(ts as i64, vec![AttributeValue::Int(*id), text.clone()])
            })
            .collect();
        self.runtime.process(to_stream_event_chunk(&events))
    }

    pub fn send(&self, text: &str) -> EventFluxResult<()> {
        self.send_batch(&[(1, AttributeValue::from(text))])
    }

    pub fn chunks(&self) -> Vec<Vec<Event>> {
        self.collected.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.chunks().into_iter().flatten().collect()
    }

    /// The `token` attribute of every emitted event, in order.
    pub fn tokens(&self) -> Vec<String> {
        self.events()
            .iter()
            .map(|e| match e.get_data_at_idx(2) {
                Some(AttributeValue::String(token)) => token.clone(),
                other => panic!("expected a string token, found {other:?}"),
            })
            .collect()
    }
}
