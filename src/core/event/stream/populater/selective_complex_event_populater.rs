// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/populater/selective_complex_event_populater.rs
use super::{ComplexEventPopulater, StreamMappingElement};
use crate::core::event::{
    complex_event::ComplexEvent, stream::stream_event::StreamEvent, value::AttributeValue,
};

#[derive(Debug, Clone)]
pub struct SelectiveComplexEventPopulater {
    pub mappings: Vec<StreamMappingElement>,
}

impl SelectiveComplexEventPopulater {
    pub fn new(mappings: Vec<StreamMappingElement>) -> Self {
        Self { mappings }
    }
}

impl ComplexEventPopulater for SelectiveComplexEventPopulater {
    fn populate_complex_event(
        &self,
        complex_event: &mut dyn ComplexEvent,
        data: &[AttributeValue],
    ) -> Result<(), String> {
        let se = complex_event
            .as_any_mut()
            .downcast_mut::<StreamEvent>()
            .ok_or("populater only supports stream events")?;
        for mapping in &self.mappings {
            if let (Some(pos), Some(val)) = (&mapping.to_position, data.get(mapping.from_position))
            {
                se.set_attribute_by_position(val.clone(), pos)?;
            }
        }
        Ok(())
    }
}
