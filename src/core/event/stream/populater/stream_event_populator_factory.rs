// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/populater/stream_event_populator_factory.rs
use super::{SelectiveComplexEventPopulater, StreamMappingElement};
use crate::core::event::stream::meta_stream_event::MetaStreamEvent;
use crate::core::util::eventflux_constants::{
    BEFORE_WINDOW_DATA_INDEX, ON_AFTER_WINDOW_DATA_INDEX, OUTPUT_DATA_INDEX,
};
use crate::query_api::definition::attribute::Attribute;

/// Build a populater writing `attributes` (in order) into events laid out by `meta`.
///
/// Sections are searched output first, then on-after-window, then
/// before-window; the last attribute with a matching name wins so that
/// appended attributes take precedence over input attributes of the same name.
pub fn construct_event_populator(
    meta: &MetaStreamEvent,
    stream_event_chain_index: i32,
    attributes: &[Attribute],
) -> SelectiveComplexEventPopulater {
    let sections = [
        (OUTPUT_DATA_INDEX, meta.get_output_data()),
        (ON_AFTER_WINDOW_DATA_INDEX, meta.get_on_after_window_data()),
        (BEFORE_WINDOW_DATA_INDEX, meta.get_before_window_data()),
    ];
    let mappings = attributes
        .iter()
        .enumerate()
        .map(|(i, attr)| {
            let to_position = sections.iter().find_map(|(section, attrs)| {
                attrs.iter().rposition(|a| a.name == attr.name).map(|index| {
                    vec![stream_event_chain_index, 0, *section as i32, index as i32]
                })
            });
            StreamMappingElement::new(i, to_position)
        })
        .collect();
    SelectiveComplexEventPopulater::new(mappings)
}
