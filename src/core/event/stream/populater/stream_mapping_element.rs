// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/populater/stream_mapping_element.rs

/// Maps `data[from_position]` to an EventFlux position array in the target event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamMappingElement {
    pub from_position: usize,
    pub to_position: Option<Vec<i32>>,
}

impl StreamMappingElement {
    pub fn new(from_position: usize, to_position: Option<Vec<i32>>) -> Self {
        Self {
            from_position,
            to_position,
        }
    }
}
