//! Configuration
//!
//! Team size defaults and environment overrides are resolved once, at startup,
//! into a [`GreeterConfig`] that is passed explicitly to the greeter.

pub mod config_data;
pub mod config_operations;

pub use config_data::{GreeterConfig, OutputOrder};
pub use config_operations::{
    load_config_file, load_config_from_env, parse_num_threads, parse_output_order,
    resolve_config_with, resolve_team_size, validate_config,
};
