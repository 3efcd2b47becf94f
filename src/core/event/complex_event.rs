// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/complex_event.rs
// Corresponds to io.eventflux.core.event.ComplexEvent (interface)
use super::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;

/// Type of complex event (CURRENT, EXPIRED, TIMER, RESET).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComplexEventType {
    #[default]
    Current,
    Expired,
    Timer,
    Reset,
}

/// Trait for complex events that can form a linked list (chunk) and carry various data arrays.
pub trait ComplexEvent: Debug + Send + Sync + 'static {
    fn get_next(&self) -> Option<&dyn ComplexEvent>;
    /// Replaces the next pointer and returns the old one.
    fn set_next(
        &mut self,
        next_event: Option<Box<dyn ComplexEvent>>,
    ) -> Option<Box<dyn ComplexEvent>>;
    fn mut_next_ref_option(&mut self) -> &mut Option<Box<dyn ComplexEvent>>;

    fn get_output_data(&self) -> Option<&[AttributeValue]>;
    fn set_output_data(&mut self, data: Option<Vec<AttributeValue>>);

    fn get_timestamp(&self) -> i64;
    fn set_timestamp(&mut self, timestamp: i64);

    fn get_event_type(&self) -> ComplexEventType;
    fn set_event_type(&mut self, event_type: ComplexEventType);

    fn is_expired(&self) -> bool {
        self.get_event_type() == ComplexEventType::Expired
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Iterate a chunk from `head`, following `next` pointers, without taking it apart.
pub fn chunk_iter<'a>(head: &'a dyn ComplexEvent) -> impl Iterator<Item = &'a dyn ComplexEvent> {
    std::iter::successors(Some(head), |event| event.get_next())
}
