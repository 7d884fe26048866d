//! Constants for the parallel greeter
//!
//! Environment variable names, the greeting format and hard limits live here
//! so config, greeter and tests agree on them.

/// Environment variables read once at startup
pub mod env {
    /// Team size, OpenMP convention (comma list, first entry wins)
    pub const NUM_THREADS: &str = "OMP_NUM_THREADS";
    /// Upper bound on the team size
    pub const THREAD_LIMIT: &str = "OMP_THREAD_LIMIT";
    /// `unordered` or `by_index`
    pub const OUTPUT_ORDER: &str = "GREETER_OUTPUT_ORDER";
    /// Path to an optional TOML config file
    pub const CONFIG_PATH: &str = "GREETER_CONFIG";
}

/// Greeting line format
pub mod greeting {
    /// Everything before the worker index
    pub const PREFIX: &str = "Hello World... from thread = ";
}

/// Team limits
pub mod team {
    /// Largest team the runtime will try to build
    pub const MAX_TEAM_SIZE: usize = 1 << 16;
    /// Default worker thread name prefix
    pub const DEFAULT_THREAD_NAME_PREFIX: &str = "greeter-worker";
}

/// Process exit codes
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const RUNTIME_INIT_FAILURE: i32 = 2;
}
