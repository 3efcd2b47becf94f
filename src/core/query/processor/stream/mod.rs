// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/processor/stream/mod.rs
pub mod function;
pub mod stream_processor;
pub mod stream_processor_runtime;

pub use self::function::{TokenizeStreamProcessor, Tokens};
pub use self::stream_processor::StreamProcessor;
pub use self::stream_processor_runtime::StreamProcessorRuntime;
