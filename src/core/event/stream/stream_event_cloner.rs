// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/stream_event_cloner.rs
// Utility for cloning StreamEvents similar to io.eventflux.core.event.stream.StreamEventCloner

use super::{
    meta_stream_event::MetaStreamEvent, stream_event::StreamEvent,
    stream_event_factory::StreamEventFactory,
};

/// Copies a stream event into a freshly allocated event of the target layout.
///
/// The target layout may be wider than the source (a stream processor that
/// appends attributes); slots without a source value stay `Null` until a
/// populater fills them.
#[derive(Debug, Clone)]
pub struct StreamEventCloner {
    event_factory: StreamEventFactory,
}

impl StreamEventCloner {
    pub fn new(factory: StreamEventFactory) -> Self {
        Self {
            event_factory: factory,
        }
    }

    pub fn from_meta(meta: &MetaStreamEvent) -> Self {
        Self::new(StreamEventFactory::from_meta(meta))
    }

    pub fn copy_stream_event(&self, stream_event: &StreamEvent) -> StreamEvent {
        let mut new_event = self.event_factory.new_instance();
        for (dest, val) in new_event
            .before_window_data
            .iter_mut()
            .zip(&stream_event.before_window_data)
        {
            *dest = val.clone();
        }
        for (dest, val) in new_event
            .on_after_window_data
            .iter_mut()
            .zip(&stream_event.on_after_window_data)
        {
            *dest = val.clone();
        }
        if let (Some(src), Some(dest)) = (
            stream_event.output_data.as_ref(),
            new_event.output_data.as_mut(),
        ) {
            for (d, v) in dest.iter_mut().zip(src) {
                *d = v.clone();
            }
        }
        new_event.event_type = stream_event.event_type;
        new_event.timestamp = stream_event.timestamp;
        new_event
    }
}
