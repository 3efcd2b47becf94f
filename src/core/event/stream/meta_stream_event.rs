// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/stream/meta_stream_event.rs
// Layout of the stream events flowing through one point of a query: which
// attributes live in which data section.
use crate::query_api::definition::{
    attribute::Type as ApiAttributeType, Attribute as ApiAttribute,
    StreamDefinition as ApiStreamDefinition,
};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MetaStreamEvent {
    pub input_stream_definition: Arc<ApiStreamDefinition>,

    // attribute name -> (index in output data, type)
    attribute_info: HashMap<String, (usize, ApiAttributeType)>,
    pub before_window_data: Vec<ApiAttribute>,
    pub on_after_window_data: Vec<ApiAttribute>,
    pub output_data: Vec<ApiAttribute>,
    pub output_stream_definition: Option<Arc<ApiStreamDefinition>>,
}

impl MetaStreamEvent {
    /// Layout for a single input stream whose attributes all sit in `output_data`.
    pub fn new_for_single_input(input_stream_def: Arc<ApiStreamDefinition>) -> Self {
        let attribute_info = input_stream_def
            .abstract_definition
            .attribute_list
            .iter()
            .enumerate()
            .map(|(index, attr)| (attr.name.clone(), (index, attr.attribute_type)))
            .collect();
        Self {
            output_data: input_stream_def.abstract_definition.attribute_list.clone(),
            input_stream_definition: input_stream_def,
            attribute_info,
            before_window_data: Vec::new(),
            on_after_window_data: Vec::new(),
            output_stream_definition: None,
        }
    }

    /// Returns (index_in_output_data, attribute_type).
    pub fn find_attribute_info(&self, attribute_name: &str) -> Option<&(usize, ApiAttributeType)> {
        self.attribute_info.get(attribute_name)
    }

    pub fn get_before_window_data(&self) -> &[ApiAttribute] {
        &self.before_window_data
    }

    pub fn get_on_after_window_data(&self) -> &[ApiAttribute] {
        &self.on_after_window_data
    }

    pub fn get_output_data(&self) -> &[ApiAttribute] {
        &self.output_data
    }

    /// Appends an attribute to the output section. Appended attributes shadow
    /// earlier ones of the same name for lookups.
    pub fn add_output_data_allowing_duplicate(&mut self, attr: ApiAttribute) {
        self.attribute_info.insert(
            attr.name.clone(),
            (self.output_data.len(), attr.attribute_type),
        );
        self.output_data.push(attr);
    }

    pub fn set_output_definition(&mut self, def: ApiStreamDefinition) {
        self.output_stream_definition = Some(Arc::new(def));
    }

    pub fn get_output_stream_definition(&self) -> Option<&Arc<ApiStreamDefinition>> {
        self.output_stream_definition.as_ref()
    }
}
