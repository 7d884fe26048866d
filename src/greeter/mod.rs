//! Parallel Greeter
//!
//! Forks a team, has every worker print `Hello World... from thread = <i>`,
//! joins the team and checks that indices `0..N` each reported exactly once.

pub mod greeter_data;
pub mod greeter_operations;

pub use greeter_data::{Greeting, RegionReport};
pub use greeter_operations::{
    format_greeting, parse_greeting, run_greeter, run_parallel_region, verify_team_indices,
};
