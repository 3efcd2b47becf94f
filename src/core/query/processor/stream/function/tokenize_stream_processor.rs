// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/processor/stream/function/tokenize_stream_processor.rs

//! `str:tokenize(input.string, regex[, distinct])`
//!
//! Splits `input.string` by `regex` and emits one event per token, with the
//! token appended as the `token` attribute. With `distinct = true` repeated
//! tokens of the same input event are emitted once.

use super::tokens::Tokens;
use crate::core::config::config_reader::ConfigReader;
use crate::core::config::eventflux_app_context::EventFluxAppContext;
use crate::core::event::complex_event::{chunk_iter, ComplexEvent};
use crate::core::event::stream::{ComplexEventPopulater, StreamEvent, StreamEventCloner};
use crate::core::event::value::AttributeValue;
use crate::core::exception::{EventFluxError, EventFluxResult};
use crate::core::executor::ExpressionArgument;
use crate::core::persistence::ProcessorState;
use crate::core::query::processor::stream::StreamProcessor;
use crate::core::query::processor::Processor;
use crate::query_api::definition::attribute::Type as ApiAttributeType;
use crate::query_api::definition::{Attribute, StreamDefinition};
use regex::Regex;
use std::sync::Arc;

pub const TOKENIZE_NAMESPACE: &str = "str";
pub const TOKENIZE_NAME: &str = "tokenize";
pub const TOKENIZE_QUALIFIED_NAME: &str = "str:tokenize";
pub const TOKEN_ATTRIBUTE: &str = "token";

#[derive(Debug, Default)]
pub struct TokenizeStreamProcessor {
    source: Option<ExpressionArgument>,
    regex: Option<Regex>,
    distinct: bool,
}

impl TokenizeStreamProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    fn non_constant(argument: &str) -> EventFluxError {
        EventFluxError::NonConstantArgument {
            function: TOKENIZE_QUALIFIED_NAME.to_string(),
            argument: argument.to_string(),
        }
    }

    fn null_argument(argument: &str) -> EventFluxError {
        EventFluxError::InvalidArgument {
            function: TOKENIZE_QUALIFIED_NAME.to_string(),
            message: format!("{argument} argument cannot be null"),
        }
    }

    fn compile_regex(argument: &ExpressionArgument) -> EventFluxResult<Regex> {
        if argument.get_return_type() != ApiAttributeType::STRING {
            return Err(EventFluxError::type_error(
                "Regex",
                ApiAttributeType::STRING,
                argument.get_return_type(),
            ));
        }
        let constant = argument
            .as_constant()
            .ok_or_else(|| Self::non_constant("Regex"))?;
        let pattern = match constant.get_value() {
            AttributeValue::String(pattern) => pattern,
            AttributeValue::Null => return Err(Self::null_argument("Regex")),
            other => {
                return Err(EventFluxError::type_error(
                    "Regex",
                    ApiAttributeType::STRING,
                    other.get_type(),
                ))
            }
        };
        Regex::new(pattern).map_err(|e| EventFluxError::PatternSyntax {
            message: e.to_string(),
        })
    }

    fn read_distinct(argument: &ExpressionArgument) -> EventFluxResult<bool> {
        const ARGUMENT: &str = "Third attribute 'distinct'";
        if argument.get_return_type() != ApiAttributeType::BOOL {
            return Err(EventFluxError::type_error(
                ARGUMENT,
                ApiAttributeType::BOOL,
                argument.get_return_type(),
            ));
        }
        let constant = argument
            .as_constant()
            .ok_or_else(|| Self::non_constant("Distinct"))?;
        match constant.get_value() {
            AttributeValue::Bool(distinct) => Ok(*distinct),
            AttributeValue::Null => Err(Self::null_argument("Distinct")),
            other => Err(EventFluxError::type_error(
                ARGUMENT,
                ApiAttributeType::BOOL,
                other.get_type(),
            )),
        }
    }

    fn source_text(source: &ExpressionArgument, event: &dyn ComplexEvent) -> EventFluxResult<String> {
        match source.execute(Some(event)) {
            Some(AttributeValue::String(text)) => Ok(text),
            Some(AttributeValue::Null) | None => Err(EventFluxError::runtime(format!(
                "Invalid input given to {TOKENIZE_QUALIFIED_NAME}() function. \
                 Input.string argument cannot be null"
            ))),
            Some(other) => Err(EventFluxError::runtime(format!(
                "Invalid input given to {TOKENIZE_QUALIFIED_NAME}() function. \
                 Input.string should be of type STRING. But found {}",
                other.get_type()
            ))),
        }
    }
}

impl StreamProcessor for TokenizeStreamProcessor {
    fn init(
        &mut self,
        input_definition: &StreamDefinition,
        arguments: Vec<ExpressionArgument>,
        _config_reader: &dyn ConfigReader,
        _eventflux_app_context: &Arc<EventFluxAppContext>,
    ) -> EventFluxResult<Vec<Attribute>> {
        let found = arguments.len();
        let mut arguments = arguments.into_iter();
        let (source, regex, distinct) = match (
            arguments.next(),
            arguments.next(),
            arguments.next(),
            arguments.next(),
        ) {
            (Some(source), Some(regex), distinct, None) => (source, regex, distinct),
            _ => {
                return Err(EventFluxError::InvalidArgumentCount {
                    function: TOKENIZE_QUALIFIED_NAME.to_string(),
                    required: "2 or 3".to_string(),
                    found,
                })
            }
        };

        if source.get_return_type() != ApiAttributeType::STRING {
            return Err(EventFluxError::type_error(
                "Input string",
                ApiAttributeType::STRING,
                source.get_return_type(),
            ));
        }
        let regex = Self::compile_regex(&regex)?;
        let distinct = distinct
            .as_ref()
            .map(Self::read_distinct)
            .transpose()?
            .unwrap_or(false);

        log::debug!(
            "{TOKENIZE_QUALIFIED_NAME} on stream '{}': regex '{}', distinct {}",
            input_definition.abstract_definition.get_id(),
            regex.as_str(),
            distinct
        );
        self.source = Some(source);
        self.regex = Some(regex);
        self.distinct = distinct;

        Ok(vec![Attribute::new(
            TOKEN_ATTRIBUTE.to_string(),
            ApiAttributeType::STRING,
        )])
    }

    fn process(
        &self,
        stream_event_chunk: &dyn ComplexEvent,
        next_processor: &dyn Processor,
        cloner: &StreamEventCloner,
        populater: &dyn ComplexEventPopulater,
    ) -> EventFluxResult<()> {
        let (Some(source), Some(regex)) = (self.source.as_ref(), self.regex.as_ref()) else {
            return Err(EventFluxError::runtime(format!(
                "{TOKENIZE_QUALIFIED_NAME} received events before init"
            )));
        };

        for event in chunk_iter(stream_event_chunk) {
            let stream_event = event
                .as_any()
                .downcast_ref::<StreamEvent>()
                .ok_or_else(|| {
                    EventFluxError::runtime(format!(
                        "{TOKENIZE_QUALIFIED_NAME} only processes stream events"
                    ))
                })?;
            let text = Self::source_text(source, event)?;

            let tokens = Tokens::new(regex, &text);
            let tokens = if self.distinct {
                tokens.distinct()
            } else {
                tokens
            };
            for token in tokens {
                let mut output = cloner.copy_stream_event(stream_event);
                populater
                    .populate_complex_event(&mut output, &[AttributeValue::from(token)])
                    .map_err(EventFluxError::runtime)?;
                log::trace!("{TOKENIZE_QUALIFIED_NAME} emitting token {token:?}");
                next_processor.process(Some(Box::new(output)))?;
            }
        }
        Ok(())
    }

    fn start(&mut self) {
        log::debug!("{TOKENIZE_QUALIFIED_NAME} started");
    }

    fn stop(&mut self) {
        log::debug!("{TOKENIZE_QUALIFIED_NAME} stopped");
    }

    fn current_state(&self) -> Option<ProcessorState> {
        None
    }

    fn restore_state(&mut self, state: ProcessorState) -> EventFluxResult<()> {
        if !state.is_empty() {
            log::debug!(
                "{TOKENIZE_QUALIFIED_NAME} is stateless, ignoring {} restored entries",
                state.len()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FlatConfigReader;
    use crate::core::executor::VariableExpressionExecutor;
    use crate::core::util::eventflux_constants::OUTPUT_DATA_INDEX;

    fn input() -> StreamDefinition {
        StreamDefinition::new("inputStream".to_string())
            .attribute("str".to_string(), ApiAttributeType::STRING)
    }

    fn source() -> ExpressionArgument {
        ExpressionArgument::dynamic(VariableExpressionExecutor::new(
            [0, 0, OUTPUT_DATA_INDEX as i32, 0],
            ApiAttributeType::STRING,
            "str".to_string(),
        ))
    }

    fn init(arguments: Vec<ExpressionArgument>) -> EventFluxResult<TokenizeStreamProcessor> {
        let mut processor = TokenizeStreamProcessor::new();
        let app = Arc::new(EventFluxAppContext::default_for_testing());
        processor.init(&input(), arguments, &FlatConfigReader::empty(), &app)?;
        Ok(processor)
    }

    #[test]
    fn test_init_returns_token_attribute() {
        let mut processor = TokenizeStreamProcessor::new();
        let app = Arc::new(EventFluxAppContext::default_for_testing());
        let attrs = processor
            .init(
                &input(),
                vec![
                    source(),
                    ExpressionArgument::constant(AttributeValue::from(","), ApiAttributeType::STRING),
                ],
                &FlatConfigReader::empty(),
                &app,
            )
            .unwrap();
        assert_eq!(
            attrs,
            vec![Attribute::new("token".to_string(), ApiAttributeType::STRING)]
        );
        assert_eq!(processor.regex().map(Regex::as_str), Some(","));
        assert!(!processor.is_distinct());
    }

    #[test]
    fn test_distinct_flag_read_from_third_argument() {
        let processor = init(vec![
            source(),
            ExpressionArgument::constant(AttributeValue::from(","), ApiAttributeType::STRING),
            ExpressionArgument::constant(AttributeValue::Bool(true), ApiAttributeType::BOOL),
        ])
        .unwrap();
        assert!(processor.is_distinct());
    }

    #[test]
    fn test_null_regex_constant_rejected() {
        let err = init(vec![
            source(),
            ExpressionArgument::constant(AttributeValue::Null, ApiAttributeType::STRING),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input given to str:tokenize() function. Regex argument cannot be null"
        );
    }

    #[test]
    fn test_non_constant_distinct_rejected() {
        let err = init(vec![
            source(),
            ExpressionArgument::constant(AttributeValue::from(","), ApiAttributeType::STRING),
            ExpressionArgument::dynamic(VariableExpressionExecutor::new(
                [0, 0, OUTPUT_DATA_INDEX as i32, 1],
                ApiAttributeType::BOOL,
                "flag".to_string(),
            )),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            EventFluxError::NonConstantArgument { ref argument, .. } if argument == "Distinct"
        ));
    }

    #[test]
    fn test_lifecycle_hooks_are_stateless() {
        let mut processor = init(vec![
            source(),
            ExpressionArgument::constant(AttributeValue::from(","), ApiAttributeType::STRING),
        ])
        .unwrap();
        processor.start();
        assert!(processor.current_state().is_none());
        let mut state = ProcessorState::new();
        state.insert("anything".to_string(), AttributeValue::Int(1));
        processor.restore_state(state).unwrap();
        processor.stop();
        assert_eq!(processor.regex().map(Regex::as_str), Some(","));
    }
}
