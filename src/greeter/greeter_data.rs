//! Greeter Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in greeter_operations.rs

use crate::config::OutputOrder;
use std::time::Duration;

/// A worker's formatted line, without the trailing newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub index: usize,
    pub line: String,
}

/// Outcome of one parallel region
#[derive(Debug, Clone)]
pub struct RegionReport {
    pub team_size: usize,
    pub lines_emitted: usize,
    /// Observed worker indices, sorted
    pub indices: Vec<usize>,
    pub order: OutputOrder,
    pub elapsed: Duration,
}
