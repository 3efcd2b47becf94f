// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/executor/expression_executor.rs
// Corresponds to io.eventflux.core.executor.ExpressionExecutor (interface)

use crate::core::event::complex_event::ComplexEvent;
use crate::core::event::value::AttributeValue;
use crate::query_api::definition::attribute::Type as ApiAttributeType;
use std::fmt::Debug;

/// Trait for all expression executors which can be executed on an event.
pub trait ExpressionExecutor: Debug + Send + Sync + 'static {
    /// Evaluate against `event`. Constant expressions accept `None`.
    /// `None` as a result means the expression could not be evaluated.
    fn execute(&self, event: Option<&dyn ComplexEvent>) -> Option<AttributeValue>;

    fn get_return_type(&self) -> ApiAttributeType;
}
