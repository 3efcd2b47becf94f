// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/exception/mod.rs
pub mod error;

pub use self::error::{EventFluxError, EventFluxResult};
