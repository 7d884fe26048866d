//! Thread Pool Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in thread_pool_operations.rs

use crate::constants::team::DEFAULT_THREAD_NAME_PREFIX;

/// Configuration for one worker team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPoolConfig {
    pub team_size: usize,
    pub thread_name_prefix: String,
    pub stack_size: Option<usize>,
}

impl Default for TeamPoolConfig {
    fn default() -> Self {
        Self {
            team_size: 1,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
            stack_size: None,
        }
    }
}

/// A built worker team. Dropping it shuts the team's threads down.
pub struct TeamPoolData {
    pub(crate) pool: rayon::ThreadPool,
    pub(crate) team_size: usize,
}

impl std::fmt::Debug for TeamPoolData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamPoolData")
            .field("team_size", &self.team_size)
            .finish()
    }
}

/// One worker inside a running parallel region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerTask {
    /// Team-relative index in `[0, team_size)`
    pub index: usize,
    pub team_size: usize,
}
