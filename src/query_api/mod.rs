// SPDX-License-Identifier: MIT OR Apache-2.0

// src/query_api/mod.rs
// Definitions shared between query authors and the runtime.
pub mod definition;
