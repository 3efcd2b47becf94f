// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/output/mod.rs
pub mod collecting_processor;

pub use self::collecting_processor::CollectingProcessor;
