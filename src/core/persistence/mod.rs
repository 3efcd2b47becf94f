// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/persistence/mod.rs

pub mod state_holder;

pub use self::state_holder::{component_id, ComponentId, ProcessorState, StateError};
