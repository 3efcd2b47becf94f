// SPDX-License-Identifier: MIT OR Apache-2.0

// src/query_api/definition/abstract_definition.rs
use super::attribute::Attribute;

/// Common part of every definition: an id and an ordered attribute list.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AbstractDefinition {
    pub id: String,
    pub attribute_list: Vec<Attribute>,
}

impl AbstractDefinition {
    pub fn new(id: String) -> Self {
        Self {
            id,
            attribute_list: Vec::new(),
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_attribute_list(&self) -> &[Attribute] {
        &self.attribute_list
    }

    pub fn get_attribute_names(&self) -> Vec<String> {
        self.attribute_list.iter().map(|a| a.name.clone()).collect()
    }
}
