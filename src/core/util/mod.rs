// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/util/mod.rs

pub mod eventflux_constants;
