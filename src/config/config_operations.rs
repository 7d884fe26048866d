//! Config Operations - Pure DOP Functions
//!
//! Resolution order, later wins: defaults, the TOML file named by
//! `GREETER_CONFIG`, then the environment. Invalid environment values are
//! ignored with a warning, the way OpenMP runtimes treat them.

use super::config_data::{GreeterConfig, OutputOrder};
use crate::constants::env;
use crate::error::{ErrorContext, GreeterError, GreeterResult};
use std::env::VarError;
use std::path::Path;

/// Resolve configuration from the real process environment
pub fn load_config_from_env() -> GreeterResult<GreeterConfig> {
    resolve_config_with(|key| env_value(key, std::env::var(key)))
}

/// Turn an environment read into a value; non-UTF-8 values are ignored with a warning
fn env_value(key: &str, value: Result<String, VarError>) -> Option<String> {
    match value {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            log::warn!(
                "[config::env_value] Ignoring invalid {}={:?} (not UTF-8)",
                key,
                raw
            );
            None
        }
    }
}

/// Resolve configuration using `lookup` in place of the process environment
pub fn resolve_config_with<F>(lookup: F) -> GreeterResult<GreeterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(env::CONFIG_PATH) {
        Some(path) if !path.is_empty() => load_config_file(Path::new(&path))?,
        _ => GreeterConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup);
    validate_config(&config)?;

    log::info!("[config::resolve] Resolved configuration: {:?}", config);
    Ok(config)
}

/// Load a TOML config file
pub fn load_config_file(path: &Path) -> GreeterResult<GreeterConfig> {
    log::debug!("[config::load_config_file] Reading {}", path.display());

    let contents = std::fs::read_to_string(path).config_context(path)?;
    let config: GreeterConfig = toml::from_str(&contents).config_context(path)?;
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut GreeterConfig, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(env::NUM_THREADS) {
        match parse_num_threads(&raw) {
            Some(n) => config.team_size = Some(n),
            None => log::warn!(
                "[config::apply_env_overrides] Ignoring invalid {}={:?}",
                env::NUM_THREADS,
                raw
            ),
        }
    }

    if let Some(raw) = lookup(env::THREAD_LIMIT) {
        match parse_num_threads(&raw) {
            Some(n) => config.thread_limit = Some(n),
            None => log::warn!(
                "[config::apply_env_overrides] Ignoring invalid {}={:?}",
                env::THREAD_LIMIT,
                raw
            ),
        }
    }

    if let Some(raw) = lookup(env::OUTPUT_ORDER) {
        match parse_output_order(&raw) {
            Some(order) => config.output_order = order,
            None => log::warn!(
                "[config::apply_env_overrides] Ignoring invalid {}={:?}",
                env::OUTPUT_ORDER,
                raw
            ),
        }
    }
}

/// Parse an OpenMP-style thread count.
///
/// The value may be a comma-separated list of per-nesting-level counts; only
/// the first entry applies to a single region. Returns `None` unless that entry
/// is a positive integer.
pub fn parse_num_threads(raw: &str) -> Option<usize> {
    let first = raw.split(',').next()?.trim();
    match first.parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

pub fn parse_output_order(raw: &str) -> Option<OutputOrder> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "unordered" => Some(OutputOrder::Unordered),
        "by_index" => Some(OutputOrder::ByIndex),
        _ => None,
    }
}

/// Validate configuration parameters
pub fn validate_config(config: &GreeterConfig) -> GreeterResult<()> {
    let non_zero = [
        ("team_size", config.team_size),
        ("thread_limit", config.thread_limit),
        ("stack_size", config.stack_size),
    ];
    for (field, value) in non_zero {
        if value == Some(0) {
            return Err(GreeterError::InvalidConfig {
                field: field.to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
    }

    if config.thread_name_prefix.trim().is_empty() {
        return Err(GreeterError::InvalidConfig {
            field: "thread_name_prefix".to_string(),
            value: format!("{:?}", config.thread_name_prefix),
            reason: "cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Final team size: the requested size, or `available` hardware contexts,
/// capped by the thread limit. Never less than 1.
pub fn resolve_team_size(config: &GreeterConfig, available: usize) -> usize {
    let requested = config.team_size.unwrap_or(available).max(1);

    match config.thread_limit {
        Some(limit) if requested > limit => {
            log::warn!(
                "[config::resolve_team_size] Requested team of {} exceeds thread limit {}, capping",
                requested,
                limit
            );
            limit.max(1)
        }
        _ => requested,
    }
}
