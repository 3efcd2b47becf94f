// SPDX-License-Identifier: MIT OR Apache-2.0

// Corresponds to io.eventflux.query.api.definition.StreamDefinition
use crate::query_api::definition::abstract_definition::AbstractDefinition;
use crate::query_api::definition::attribute::{Attribute, Type as AttributeType};

/// Defines a stream with a unique ID and a list of attributes.
///
/// ```
/// use eventflux_string::query_api::definition::{attribute::Type, StreamDefinition};
///
/// let def = StreamDefinition::new("InputStream".to_string())
///     .attribute("str".to_string(), Type::STRING);
/// assert_eq!(def.abstract_definition.get_attribute_list().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StreamDefinition {
    pub abstract_definition: AbstractDefinition,
}

impl StreamDefinition {
    pub fn new(id: String) -> Self {
        StreamDefinition {
            abstract_definition: AbstractDefinition::new(id),
        }
    }

    pub fn id(stream_id: String) -> Self {
        Self::new(stream_id)
    }

    /// Builder-style attribute append. Duplicate names are kept but logged,
    /// since positional access does not depend on the name.
    pub fn attribute(mut self, attribute_name: String, attribute_type: AttributeType) -> Self {
        if self
            .abstract_definition
            .attribute_list
            .iter()
            .any(|attr| attr.get_name() == &attribute_name)
        {
            log::warn!(
                "Duplicate attribute '{}' in stream definition '{}'",
                attribute_name,
                self.abstract_definition.id
            );
        }

        self.abstract_definition
            .attribute_list
            .push(Attribute::new(attribute_name, attribute_type));
        self
    }

    /// Definition of the stream leaving a stream processor: this stream's
    /// attributes followed by the attributes the processor appends.
    pub fn with_appended_attributes(&self, appended: &[Attribute]) -> Self {
        let mut def = self.clone();
        def.abstract_definition
            .attribute_list
            .extend(appended.iter().cloned());
        def
    }
}

impl AsRef<AbstractDefinition> for StreamDefinition {
    fn as_ref(&self) -> &AbstractDefinition {
        &self.abstract_definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_definition_creation_and_attributes() {
        let stream_def = StreamDefinition::new("InputStream".to_string())
            .attribute("userID".to_string(), AttributeType::STRING)
            .attribute("value".to_string(), AttributeType::INT);

        assert_eq!(stream_def.abstract_definition.get_id(), "InputStream");

        let attributes = stream_def.abstract_definition.get_attribute_list();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes[0].get_name(), "userID");
        assert_eq!(attributes[1].get_type(), &AttributeType::INT);
    }

    #[test]
    fn test_with_appended_attributes_keeps_order() {
        let def = StreamDefinition::id("In".to_string())
            .attribute("str".to_string(), AttributeType::STRING);
        let out = def.with_appended_attributes(&[Attribute::new(
            "token".to_string(),
            AttributeType::STRING,
        )]);

        assert_eq!(
            out.abstract_definition.get_attribute_names(),
            vec!["str".to_string(), "token".to_string()]
        );
        // source definition is untouched
        assert_eq!(def.abstract_definition.get_attribute_list().len(), 1);
    }
}
