// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/persistence/state_holder.rs

//! State exchanged between stream processors and the host's snapshot
//! machinery.
//!
//! A processor hands its state to the host as a [`ProcessorState`] map and gets
//! the same map back on restore. Stateless processors report `None` and ignore
//! whatever they are given.

use crate::core::event::value::AttributeValue;
use std::collections::HashMap;

/// Snapshot of a single processor's state, keyed by state element name.
pub type ProcessorState = HashMap<String, AttributeValue>;

/// Unique identifier for a state component
pub type ComponentId = String;

/// Component id under which a processor's state is stored, e.g.
/// `query1-str:tokenize`.
pub fn component_id(query_name: &str, processor_name: &str) -> ComponentId {
    format!("{query_name}-{processor_name}")
}

/// State management errors
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid state data: {message}")]
    InvalidStateData { message: String },

    #[error("No state registered for component '{component_id}'")]
    UnknownComponent { component_id: ComponentId },
}
