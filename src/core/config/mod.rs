// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/config/mod.rs

pub mod config_reader;
pub mod eventflux_app_context;
pub mod eventflux_context;
pub mod eventflux_query_context;
pub mod flat_config;
pub mod toml_config;

pub use self::config_reader::{ConfigReader, FlatConfigReader};
pub use self::eventflux_app_context::EventFluxAppContext;
pub use self::eventflux_context::EventFluxContext;
pub use self::eventflux_query_context::EventFluxQueryContext;
pub use self::flat_config::{FlatConfig, PropertySource};
pub use self::toml_config::{load_toml_config, parse_toml_config, LoadedConfig};
