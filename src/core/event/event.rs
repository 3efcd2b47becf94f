// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/event.rs
// Corresponds to io.eventflux.core.event.Event
use super::complex_event::{ComplexEvent, ComplexEventType};
use super::stream::StreamEvent;
use super::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(0);

/// A flat event as seen by callbacks and external producers: a timestamp and
/// the attribute values in stream-definition order.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub timestamp: i64,
    pub data: Vec<AttributeValue>,
    pub is_expired: bool,
}

impl Event {
    pub fn new_with_data(timestamp: i64, data: Vec<AttributeValue>) -> Self {
        Event {
            id: NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed),
            timestamp,
            data,
            is_expired: false,
        }
    }

    /// Flatten a complex event's output data. The `next` chain is not followed.
    pub fn from_complex(complex_event: &dyn ComplexEvent) -> Self {
        let mut event = Event::new_with_data(
            complex_event.get_timestamp(),
            complex_event
                .get_output_data()
                .map_or_else(Vec::new, |d| d.to_vec()),
        );
        event.is_expired = complex_event.get_event_type() == ComplexEventType::Expired;
        event
    }

    /// Stream event carrying this event's data, ready to enter a processor chain.
    pub fn to_stream_event(&self) -> StreamEvent {
        let mut se = StreamEvent::new_with_output_data(self.timestamp, self.data.clone());
        if self.is_expired {
            se.event_type = ComplexEventType::Expired;
        }
        se
    }

    pub fn get_data(&self) -> &[AttributeValue] {
        &self.data
    }

    pub fn get_data_at_idx(&self, i: usize) -> Option<&AttributeValue> {
        self.data.get(i)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event{{id={}, timestamp={}, data={:?}, is_expired={}}}",
            self.id, self.timestamp, self.data, self.is_expired
        )
    }
}

/// Link `events` into a single chunk, preserving order. `None` for an empty slice.
pub fn to_stream_event_chunk(events: &[Event]) -> Option<Box<dyn ComplexEvent>> {
    events.iter().rev().fold(None, |next, event| {
        let mut se = event.to_stream_event();
        se.next = next;
        Some(Box::new(se) as Box<dyn ComplexEvent>)
    })
}
