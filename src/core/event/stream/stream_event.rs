// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/stream_event.rs
// Corresponds to io.eventflux.core.event.stream.StreamEvent
use crate::core::event::complex_event::{ComplexEvent, ComplexEventType};
use crate::core::event::value::AttributeValue;
use crate::core::util::eventflux_constants::{
    BEFORE_WINDOW_DATA_INDEX, ON_AFTER_WINDOW_DATA_INDEX, OUTPUT_DATA_INDEX,
    STREAM_ATTRIBUTE_INDEX_IN_TYPE, STREAM_ATTRIBUTE_TYPE_INDEX,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;

/// A concrete implementation of ComplexEvent for stream processing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StreamEvent {
    pub timestamp: i64,
    pub output_data: Option<Vec<AttributeValue>>,
    pub event_type: ComplexEventType,

    pub before_window_data: Vec<AttributeValue>,
    pub on_after_window_data: Vec<AttributeValue>,

    #[serde(default, skip_serializing, skip_deserializing)]
    pub next: Option<Box<dyn ComplexEvent>>,
}

impl StreamEvent {
    pub fn new(
        timestamp: i64,
        before_window_data_size: usize,
        on_after_window_data_size: usize,
        output_data_size: usize,
    ) -> Self {
        StreamEvent {
            timestamp,
            output_data: if output_data_size > 0 {
                Some(vec![AttributeValue::default(); output_data_size])
            } else {
                None
            },
            event_type: ComplexEventType::default(),
            before_window_data: vec![AttributeValue::default(); before_window_data_size],
            on_after_window_data: vec![AttributeValue::default(); on_after_window_data_size],
            next: None,
        }
    }

    /// Event as delivered by a stream junction: all attributes in `output_data`.
    pub fn new_with_output_data(timestamp: i64, data: Vec<AttributeValue>) -> Self {
        StreamEvent {
            timestamp,
            output_data: Some(data),
            event_type: ComplexEventType::Current,
            before_window_data: Vec::new(),
            on_after_window_data: Vec::new(),
            next: None,
        }
    }

    /// Retrieve an attribute using the EventFlux position array convention.
    /// Only `position[STREAM_ATTRIBUTE_TYPE_INDEX]` and
    /// `position[STREAM_ATTRIBUTE_INDEX_IN_TYPE]` are respected.
    pub fn get_attribute_by_position(&self, position: &[i32]) -> Option<&AttributeValue> {
        let attr_index = *position.get(STREAM_ATTRIBUTE_INDEX_IN_TYPE)? as usize;
        match position.get(STREAM_ATTRIBUTE_TYPE_INDEX).copied()? as usize {
            BEFORE_WINDOW_DATA_INDEX => self.before_window_data.get(attr_index),
            OUTPUT_DATA_INDEX => self.output_data.as_ref().and_then(|v| v.get(attr_index)),
            ON_AFTER_WINDOW_DATA_INDEX => self.on_after_window_data.get(attr_index),
            _ => None,
        }
    }

    /// Set an attribute value using a EventFlux style position array.
    pub fn set_attribute_by_position(
        &mut self,
        value: AttributeValue,
        position: &[i32],
    ) -> Result<(), String> {
        let attr_index = *position
            .get(STREAM_ATTRIBUTE_INDEX_IN_TYPE)
            .ok_or("position array too short")? as usize;
        let section = match position
            .get(STREAM_ATTRIBUTE_TYPE_INDEX)
            .copied()
            .ok_or("position array too short")? as usize
        {
            BEFORE_WINDOW_DATA_INDEX => &mut self.before_window_data,
            ON_AFTER_WINDOW_DATA_INDEX => &mut self.on_after_window_data,
            OUTPUT_DATA_INDEX => self.output_data.as_mut().ok_or("output_data is None")?,
            _ => return Err("unknown attribute type".into()),
        };
        let slot = section
            .get_mut(attr_index)
            .ok_or_else(|| format!("index {attr_index} out of bounds"))?;
        *slot = value;
        Ok(())
    }
}

impl ComplexEvent for StreamEvent {
    fn get_next(&self) -> Option<&dyn ComplexEvent> {
        self.next.as_deref()
    }
    fn set_next(
        &mut self,
        next_event: Option<Box<dyn ComplexEvent>>,
    ) -> Option<Box<dyn ComplexEvent>> {
        let old_next = self.next.take();
        self.next = next_event;
        old_next
    }
    fn mut_next_ref_option(&mut self) -> &mut Option<Box<dyn ComplexEvent>> {
        &mut self.next
    }

    fn get_output_data(&self) -> Option<&[AttributeValue]> {
        self.output_data.as_deref()
    }
    fn set_output_data(&mut self, data: Option<Vec<AttributeValue>>) {
        self.output_data = data;
    }

    fn get_timestamp(&self) -> i64 {
        self.timestamp
    }
    fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }

    fn get_event_type(&self) -> ComplexEventType {
        self.event_type
    }
    fn set_event_type(&mut self, event_type: ComplexEventType) {
        self.event_type = event_type;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_by_position() {
        let mut ev = StreamEvent::new(10, 0, 0, 2);
        ev.set_attribute_by_position(
            AttributeValue::from("x"),
            &[0, 0, OUTPUT_DATA_INDEX as i32, 1],
        )
        .unwrap();
        assert_eq!(
            ev.get_attribute_by_position(&[0, 0, OUTPUT_DATA_INDEX as i32, 1]),
            Some(&AttributeValue::from("x"))
        );
    }

    #[test]
    fn test_set_out_of_bounds_is_an_error() {
        let mut ev = StreamEvent::new(0, 1, 0, 0);
        assert!(ev
            .set_attribute_by_position(AttributeValue::Int(1), &[0, 0, 0, 5])
            .is_err());
        assert!(ev
            .set_attribute_by_position(
                AttributeValue::Int(1),
                &[0, 0, OUTPUT_DATA_INDEX as i32, 0]
            )
            .is_err());
    }
}
