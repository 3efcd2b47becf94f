// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/util/eventflux_constants.rs

//! Position indexes used to address attributes inside a `StreamEvent`.
//!
//! A position array has four slots: the stream event chain index, the index
//! of the event in that chain, the data section (before-window, on-after-window
//! or output) and finally the attribute index inside that section.

// Data sections of a `StreamEvent`.
pub const BEFORE_WINDOW_DATA_INDEX: usize = 0;
pub const ON_AFTER_WINDOW_DATA_INDEX: usize = 1;
pub const OUTPUT_DATA_INDEX: usize = 2;

// Slots of a position array.
pub const STREAM_EVENT_CHAIN_INDEX: usize = 0;
pub const STREAM_EVENT_INDEX_IN_CHAIN: usize = 1;
pub const STREAM_ATTRIBUTE_TYPE_INDEX: usize = 2;
pub const STREAM_ATTRIBUTE_INDEX_IN_TYPE: usize = 3;

/// Separator between an extension namespace and its name, as in `str:tokenize`.
pub const EXTENSION_SEPARATOR: char = ':';
