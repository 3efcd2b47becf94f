// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/extension/mod.rs

//! Extension factories and the metadata they publish.
//!
//! Every factory describes its extension with an [`ExtensionMeta`] so tooling
//! can list parameters, defaults and return attributes without instantiating
//! anything.

use crate::core::query::processor::stream::function::{
    TokenizeStreamProcessor, TOKENIZE_NAME, TOKENIZE_NAMESPACE, TOKEN_ATTRIBUTE,
};
use crate::core::query::processor::stream::StreamProcessor;
use crate::core::util::eventflux_constants::EXTENSION_SEPARATOR;
use crate::query_api::definition::attribute::Type as AttrType;
use serde::Serialize;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterMeta {
    pub name: String,
    pub description: String,
    pub types: Vec<AttrType>,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnAttributeMeta {
    pub name: String,
    pub description: String,
    pub types: Vec<AttrType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleMeta {
    pub syntax: String,
    pub description: String,
}

/// Self-description of an extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionMeta {
    pub name: String,
    pub namespace: String,
    pub description: String,
    pub parameters: Vec<ParameterMeta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub return_attributes: Vec<ReturnAttributeMeta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ExampleMeta>,
}

impl ExtensionMeta {
    /// Number of arguments a query may pass: (required, maximum).
    pub fn arity(&self) -> (usize, usize) {
        let required = self.parameters.iter().filter(|p| !p.optional).count();
        (required, self.parameters.len())
    }
}

/// Factory for stream processors, registered under `namespace:name`.
pub trait StreamProcessorFactory: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn namespace(&self) -> &'static str;

    fn qualified_name(&self) -> String {
        format!("{}{}{}", self.namespace(), EXTENSION_SEPARATOR, self.name())
    }

    fn metadata(&self) -> ExtensionMeta;

    /// A fresh, uninitialised processor.
    fn create(&self) -> Box<dyn StreamProcessor>;

    fn clone_box(&self) -> Box<dyn StreamProcessorFactory>;
}

impl Clone for Box<dyn StreamProcessorFactory> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TokenizeStreamProcessorFactory;

impl StreamProcessorFactory for TokenizeStreamProcessorFactory {
    fn name(&self) -> &'static str {
        TOKENIZE_NAME
    }

    fn namespace(&self) -> &'static str {
        TOKENIZE_NAMESPACE
    }

    fn metadata(&self) -> ExtensionMeta {
        ExtensionMeta {
            name: TOKENIZE_NAME.to_string(),
            namespace: TOKENIZE_NAMESPACE.to_string(),
            description: "This function splits the input string into tokens using a given \
                          regular expression and returns the split tokens."
                .to_string(),
            parameters: vec![
                ParameterMeta {
                    name: "input.string".to_string(),
                    description: "The input string which needs to be split.".to_string(),
                    types: vec![AttrType::STRING],
                    optional: false,
                    default_value: None,
                },
                ParameterMeta {
                    name: "regex".to_string(),
                    description: "The string value which is used to tokenize the 'input.string'."
                        .to_string(),
                    types: vec![AttrType::STRING],
                    optional: false,
                    default_value: None,
                },
                ParameterMeta {
                    name: "distinct".to_string(),
                    description: "This flag is used to return only distinct values.".to_string(),
                    types: vec![AttrType::BOOL],
                    optional: true,
                    default_value: Some("false".to_string()),
                },
            ],
            return_attributes: vec![ReturnAttributeMeta {
                name: TOKEN_ATTRIBUTE.to_string(),
                description: "The attribute which contains a single token.".to_string(),
                types: vec![AttrType::STRING],
            }],
            examples: vec![ExampleMeta {
                syntax: "define stream inputStream (str string);\n\
                         @info(name = 'query1')\n\
                         from inputStream#str:tokenize(str , ',')\n\
                         select token\n\
                         insert into outputStream;"
                    .to_string(),
                description: "This query performs tokenization on the given string. If the str \
                              is \"Android,Windows8,iOS\", then the string is split into 3 \
                              events containing the `token` attribute values, i.e., `Android`, \
                              `Windows8` and `iOS`."
                    .to_string(),
            }],
        }
    }

    fn create(&self) -> Box<dyn StreamProcessor> {
        Box::new(TokenizeStreamProcessor::new())
    }

    fn clone_box(&self) -> Box<dyn StreamProcessorFactory> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_metadata() {
        let factory = TokenizeStreamProcessorFactory;
        assert_eq!(factory.qualified_name(), "str:tokenize");

        let meta = factory.metadata();
        assert_eq!(meta.arity(), (2, 3));
        assert_eq!(meta.return_attributes[0].name, "token");
        assert_eq!(
            meta.parameters[2].default_value.as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let json = serde_json::to_value(TokenizeStreamProcessorFactory.metadata()).unwrap();
        assert_eq!(json["namespace"], "str");
        assert_eq!(json["parameters"][2]["defaultValue"], "false");
        assert_eq!(json["parameters"][0]["types"][0], "STRING");
        assert!(json["parameters"][0].get("defaultValue").is_none());
        assert_eq!(json["returnAttributes"][0]["name"], "token");
    }
}
