// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/populater/mod.rs
pub mod complex_event_populater;
pub mod selective_complex_event_populater;
pub mod stream_event_populator_factory;
pub mod stream_mapping_element;

pub use complex_event_populater::ComplexEventPopulater;
pub use selective_complex_event_populater::SelectiveComplexEventPopulater;
pub use stream_event_populator_factory::construct_event_populator;
pub use stream_mapping_element::StreamMappingElement;
