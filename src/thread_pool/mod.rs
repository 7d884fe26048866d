//! Worker team
//!
//! A dedicated pool of exactly N threads per parallel region. Fork runs one
//! closure on every team thread; join returns once all of them finished.

pub mod thread_pool_data;
pub mod thread_pool_operations;

pub use thread_pool_data::{TeamPoolConfig, TeamPoolData, WorkerTask};
pub use thread_pool_operations::{create_team_pool, fork_join, max_team_size, team_size};
