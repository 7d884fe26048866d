//! Config Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in config_operations.rs

use crate::constants::team::DEFAULT_THREAD_NAME_PREFIX;
use serde::{Deserialize, Serialize};

/// How worker lines reach the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Each worker writes its own line as soon as it runs
    #[default]
    Unordered,
    /// Lines are collected per worker and written in index order after the join
    ByIndex,
}

/// Greeter configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreeterConfig {
    /// Requested team size; `None` means one worker per hardware context
    pub team_size: Option<usize>,
    /// Upper bound applied to the resolved team size
    pub thread_limit: Option<usize>,
    pub output_order: OutputOrder,
    pub thread_name_prefix: String,
    /// Worker stack size in bytes; `None` keeps the runtime default
    pub stack_size: Option<usize>,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            team_size: None,
            thread_limit: None,
            output_order: OutputOrder::Unordered,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
            stack_size: None,
        }
    }
}
