// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/executor/expression_argument.rs

//! Arguments handed to an extension at setup.
//!
//! The query compiler knows whether each argument expression folded to a
//! literal. Extensions that require a literal (a pattern, a flag) match on
//! [`ExpressionArgument::Constant`] instead of downcasting an executor.

use super::constant_expression_executor::ConstantExpressionExecutor;
use super::expression_executor::ExpressionExecutor;
use crate::core::event::complex_event::ComplexEvent;
use crate::core::event::value::AttributeValue;
use crate::query_api::definition::attribute::Type as ApiAttributeType;

#[derive(Debug)]
pub enum ExpressionArgument {
    Constant(ConstantExpressionExecutor),
    Dynamic(Box<dyn ExpressionExecutor>),
}

impl ExpressionArgument {
    pub fn constant(value: AttributeValue, return_type: ApiAttributeType) -> Self {
        ExpressionArgument::Constant(ConstantExpressionExecutor::new(value, return_type))
    }

    pub fn dynamic(executor: impl ExpressionExecutor) -> Self {
        ExpressionArgument::Dynamic(Box::new(executor))
    }

    pub fn get_return_type(&self) -> ApiAttributeType {
        match self {
            ExpressionArgument::Constant(c) => c.get_return_type(),
            ExpressionArgument::Dynamic(d) => d.get_return_type(),
        }
    }

    pub fn execute(&self, event: Option<&dyn ComplexEvent>) -> Option<AttributeValue> {
        match self {
            ExpressionArgument::Constant(c) => c.execute(event),
            ExpressionArgument::Dynamic(d) => d.execute(event),
        }
    }

    pub fn as_constant(&self) -> Option<&ConstantExpressionExecutor> {
        match self {
            ExpressionArgument::Constant(c) => Some(c),
            ExpressionArgument::Dynamic(_) => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, ExpressionArgument::Constant(_))
    }
}

impl From<ConstantExpressionExecutor> for ExpressionArgument {
    fn from(value: ConstantExpressionExecutor) -> Self {
        ExpressionArgument::Constant(value)
    }
}

impl From<Box<dyn ExpressionExecutor>> for ExpressionArgument {
    fn from(value: Box<dyn ExpressionExecutor>) -> Self {
        ExpressionArgument::Dynamic(value)
    }
}
