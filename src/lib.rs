// Parallel Greeter - runtime smoke test
//
// Forks a fixed-size team of workers, each prints its team index, then the
// team joins. Used to confirm the parallel runtime works on a machine.
//
// Layout follows a data/operations split:
// - *_data modules hold plain data types
// - *_operations modules hold the functions that transform them

pub mod constants;
pub mod error;

pub mod config;
pub mod greeter;
pub mod output;
pub mod thread_pool;

pub use config::{load_config_from_env, GreeterConfig, OutputOrder};
pub use error::{GreeterError, GreeterResult};
pub use greeter::{format_greeting, parse_greeting, run_greeter, RegionReport};
pub use output::{create_line_writer, SharedLineWriter};
pub use thread_pool::{create_team_pool, fork_join, TeamPoolConfig, TeamPoolData, WorkerTask};
