//! Error handling for the parallel greeter
//!
//! One error type for the whole crate. The binary maps it to a process exit
//! code with [`GreeterError::exit_code`].

use crate::constants::exit;
use std::path::Path;

/// Main error type for the parallel greeter
#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    /// The runtime could not create the requested worker team
    #[error("Runtime initialization failed for a team of {requested}: {reason}")]
    RuntimeInitialization { requested: usize, reason: String },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config load failed for {path}: {error}")]
    ConfigLoad { path: String, error: String },

    #[error("Output error: {error}")]
    Output { error: String },

    /// The joined team did not report every index in `[0, expected)` exactly once
    #[error("Team incomplete: expected indices 0..{expected}, observed {observed:?}")]
    TeamIncomplete {
        expected: usize,
        observed: Vec<usize>,
    },
}

impl GreeterError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GreeterError::RuntimeInitialization { .. } => exit::RUNTIME_INIT_FAILURE,
            _ => exit::FAILURE,
        }
    }

    /// True when the worker team could not be created
    pub fn is_runtime_initialization(&self) -> bool {
        matches!(self, GreeterError::RuntimeInitialization { .. })
    }
}

/// Type alias for Results in the parallel greeter
pub type GreeterResult<T> = Result<T, GreeterError>;

impl From<std::io::Error> for GreeterError {
    fn from(error: std::io::Error) -> Self {
        GreeterError::Output {
            error: error.to_string(),
        }
    }
}

/// Extension trait for attaching a config file path to foreign errors
pub trait ErrorContext<T> {
    fn config_context(self, path: &Path) -> GreeterResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn config_context(self, path: &Path) -> GreeterResult<T> {
        self.map_err(|e| GreeterError::ConfigLoad {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}
