// SPDX-License-Identifier: MIT OR Apache-2.0

// src/lib.rs

//! EventFlux string extensions.
//!
//! Provides the `str:tokenize` stream processor, which splits a string
//! attribute by a regular expression and emits one event per token:
//!
//! ```text
//! from inputStream#str:tokenize(str, ',')
//! select token
//! insert into outputStream;
//! ```

pub mod core;
pub mod query_api;

use crate::core::config::eventflux_context::EventFluxContext;
use crate::core::extension::TokenizeStreamProcessorFactory;

/// Register every extension of this crate with `context`.
pub fn register_extensions(context: &EventFluxContext) {
    context.add_stream_processor_factory(Box::new(TokenizeStreamProcessorFactory));
}
