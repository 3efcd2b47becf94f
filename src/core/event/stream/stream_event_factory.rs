// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/stream_event_factory.rs
// Corresponds to io.eventflux.core.event.stream.StreamEventFactory
use super::meta_stream_event::MetaStreamEvent;
use super::stream_event::StreamEvent;

/// Creates empty `StreamEvent`s sized for one stream layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamEventFactory {
    pub before_window_data_size: usize,
    pub on_after_window_data_size: usize,
    pub output_data_size: usize,
}

impl StreamEventFactory {
    pub fn new(
        before_window_data_size: usize,
        on_after_window_data_size: usize,
        output_data_size: usize,
    ) -> Self {
        Self {
            before_window_data_size,
            on_after_window_data_size,
            output_data_size,
        }
    }

    pub fn from_meta(meta: &MetaStreamEvent) -> Self {
        Self::new(
            meta.get_before_window_data().len(),
            meta.get_on_after_window_data().len(),
            meta.get_output_data().len(),
        )
    }

    pub fn new_instance(&self) -> StreamEvent {
        StreamEvent::new(
            0,
            self.before_window_data_size,
            self.on_after_window_data_size,
            self.output_data_size,
        )
    }
}
