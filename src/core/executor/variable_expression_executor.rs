// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/executor/variable_expression_executor.rs
use crate::core::event::complex_event::ComplexEvent;
use crate::core::event::stream::stream_event::StreamEvent;
use crate::core::event::stream::MetaStreamEvent;
use crate::core::event::value::AttributeValue;
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::util::eventflux_constants::{
    OUTPUT_DATA_INDEX, STREAM_ATTRIBUTE_INDEX_IN_TYPE, STREAM_ATTRIBUTE_TYPE_INDEX,
};
use crate::query_api::definition::attribute::Type as ApiAttributeType;

/// Executor that retrieves an attribute's value from a stream event.
#[derive(Debug, Clone)]
pub struct VariableExpressionExecutor {
    /// EventFlux position array locating the attribute inside a `StreamEvent`
    /// (chain index, index in chain, data section, attribute index).
    pub position: [i32; 4],
    pub return_type: ApiAttributeType,
    pub attribute_name_for_debug: String,
}

impl VariableExpressionExecutor {
    pub fn new(
        position: [i32; 4],
        return_type: ApiAttributeType,
        attribute_name_for_debug: String,
    ) -> Self {
        Self {
            position,
            return_type,
            attribute_name_for_debug,
        }
    }

    /// Resolve `attribute_name` against the layout described by `meta`.
    pub fn for_attribute(meta: &MetaStreamEvent, attribute_name: &str) -> Option<Self> {
        let (index, attr_type) = *meta.find_attribute_info(attribute_name)?;
        Some(Self::new(
            [0, 0, OUTPUT_DATA_INDEX as i32, index as i32],
            attr_type,
            attribute_name.to_string(),
        ))
    }
}

impl ExpressionExecutor for VariableExpressionExecutor {
    fn execute(&self, event_opt: Option<&dyn ComplexEvent>) -> Option<AttributeValue> {
        let complex_event = event_opt?;

        if let Some(stream_event) = complex_event.as_any().downcast_ref::<StreamEvent>() {
            return stream_event.get_attribute_by_position(&self.position).cloned();
        }

        if self.position[STREAM_ATTRIBUTE_TYPE_INDEX] as usize != OUTPUT_DATA_INDEX {
            return None;
        }
        complex_event
            .get_output_data()
            .and_then(|d| d.get(self.position[STREAM_ATTRIBUTE_INDEX_IN_TYPE] as usize))
            .cloned()
    }

    fn get_return_type(&self) -> ApiAttributeType {
        self.return_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_api::definition::StreamDefinition;
    use std::sync::Arc;

    #[test]
    fn test_resolves_attribute_by_name() {
        let def = StreamDefinition::new("In".to_string())
            .attribute("id".to_string(), ApiAttributeType::INT)
            .attribute("str".to_string(), ApiAttributeType::STRING);
        let meta = MetaStreamEvent::new_for_single_input(Arc::new(def));
        let exec = VariableExpressionExecutor::for_attribute(&meta, "str").unwrap();
        assert_eq!(exec.get_return_type(), ApiAttributeType::STRING);

        let ev = StreamEvent::new_with_output_data(
            0,
            vec![AttributeValue::Int(1), AttributeValue::from("a,b")],
        );
        assert_eq!(
            exec.execute(Some(&ev as &dyn ComplexEvent)),
            Some(AttributeValue::from("a,b"))
        );
        assert!(VariableExpressionExecutor::for_attribute(&meta, "missing").is_none());
    }

    #[test]
    fn test_no_event_yields_none() {
        let exec = VariableExpressionExecutor::new(
            [0, 0, OUTPUT_DATA_INDEX as i32, 0],
            ApiAttributeType::STRING,
            "str".to_string(),
        );
        assert_eq!(exec.execute(None), None);
    }
}
