// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/mod.rs

pub mod config;
pub mod event;
pub mod exception;
pub mod executor;
pub mod extension;
pub mod persistence;
pub mod query;
pub mod util;

pub use self::exception::{EventFluxError, EventFluxResult};
pub use self::extension::{StreamProcessorFactory, TokenizeStreamProcessorFactory};
pub use self::query::processor::stream::{StreamProcessor, StreamProcessorRuntime};
