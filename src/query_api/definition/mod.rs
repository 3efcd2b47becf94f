// SPDX-License-Identifier: MIT OR Apache-2.0

// src/query_api/definition/mod.rs
pub mod abstract_definition;
pub mod attribute;
pub mod stream_definition;

pub use self::abstract_definition::AbstractDefinition;
pub use self::attribute::{Attribute, Type};
pub use self::stream_definition::StreamDefinition;
