// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/exception/error.rs
use crate::core::persistence::StateError;
use crate::query_api::definition::attribute::Type as ApiAttributeType;

/// Errors raised while configuring or running EventFlux stream processors.
///
/// Everything except [`EventFluxError::Runtime`] and [`EventFluxError::State`]
/// is raised while a query is being defined and prevents it from running.
#[derive(Debug, thiserror::Error)]
pub enum EventFluxError {
    #[error("Invalid no of arguments passed to {function}() function, required {required}, but found {found}")]
    InvalidArgumentCount {
        function: String,
        required: String,
        found: usize,
    },

    #[error("{argument} should be of type {expected}. But found {found}")]
    TypeMismatch {
        argument: String,
        expected: ApiAttributeType,
        found: ApiAttributeType,
    },

    #[error("Invalid input given to {function}() function. {argument} argument should be a constant")]
    NonConstantArgument { function: String, argument: String },

    #[error("Invalid input given to {function}() function. {message}")]
    InvalidArgument { function: String, message: String },

    #[error("Syntax error in regular-expression pattern : {message}")]
    PatternSyntax { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("No {kind} extension registered under '{name}'")]
    ExtensionNotFound { kind: String, name: String },

    #[error("App creation failed: {message}")]
    AppCreation { message: String },

    #[error("Runtime error: {message}")]
    Runtime { message: String },

    #[error(transparent)]
    State(#[from] StateError),
}

pub type EventFluxResult<T> = Result<T, EventFluxError>;

impl EventFluxError {
    pub fn type_error(
        argument: impl Into<String>,
        expected: ApiAttributeType,
        found: ApiAttributeType,
    ) -> Self {
        EventFluxError::TypeMismatch {
            argument: argument.into(),
            expected,
            found,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        EventFluxError::Configuration {
            message: message.into(),
        }
    }

    pub fn extension_not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        EventFluxError::ExtensionNotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    pub fn app_creation(message: impl Into<String>) -> Self {
        EventFluxError::AppCreation {
            message: message.into(),
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        EventFluxError::Runtime {
            message: message.into(),
        }
    }

    /// True for errors that reject a query definition, as opposed to faults
    /// raised while events flow.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            EventFluxError::Runtime { .. } | EventFluxError::State(_)
        )
    }
}
