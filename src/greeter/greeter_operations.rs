//! Greeter Operations - Pure DOP Functions

use super::greeter_data::{Greeting, RegionReport};
use crate::config::{resolve_team_size, GreeterConfig, OutputOrder};
use crate::constants::greeting::PREFIX;
use crate::error::{GreeterError, GreeterResult};
use crate::output::{lines_written, write_line, SharedLineWriter};
use crate::thread_pool::{create_team_pool, fork_join, team_size, TeamPoolConfig, TeamPoolData};
use std::io::Write;
use std::time::Instant;

pub fn format_greeting(index: usize) -> String {
    format!("{}{}", PREFIX, index)
}

/// Extract the worker index from a greeting line
pub fn parse_greeting(line: &str) -> Option<usize> {
    let digits = line.strip_prefix(PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Resolve the team size, build the team and run one parallel region
pub fn run_greeter<W: Write + Send>(
    config: &GreeterConfig,
    sink: &SharedLineWriter<W>,
) -> GreeterResult<RegionReport> {
    let available = num_cpus::get();
    let size = resolve_team_size(config, available);

    log::debug!(
        "[greeter::run_greeter] {} hardware contexts available, team size {}",
        available,
        size
    );

    let team = create_team_pool(TeamPoolConfig {
        team_size: size,
        thread_name_prefix: config.thread_name_prefix.clone(),
        stack_size: config.stack_size,
    })?;

    run_parallel_region(&team, sink, config.output_order)
}

/// Fork the team, emit one greeting per worker, join, then verify indices
pub fn run_parallel_region<W: Write + Send>(
    team: &TeamPoolData,
    sink: &SharedLineWriter<W>,
    order: OutputOrder,
) -> GreeterResult<RegionReport> {
    let started = Instant::now();
    let size = team_size(team);
    let lines_before = lines_written(sink);

    log::info!(
        "[greeter::run_parallel_region] Forking team of {} ({:?})",
        size,
        order
    );

    let mut indices = match order {
        OutputOrder::Unordered => fork_join(team, |task| {
            write_line(sink, &format_greeting(task.index)).map(|_| task.index)
        })
        .into_iter()
        .collect::<GreeterResult<Vec<_>>>()?,

        OutputOrder::ByIndex => {
            let mut greetings = fork_join(team, |task| Greeting {
                index: task.index,
                line: format_greeting(task.index),
            });
            greetings.sort_by_key(|g| g.index);

            for greeting in &greetings {
                write_line(sink, &greeting.line)?;
            }
            greetings.into_iter().map(|g| g.index).collect()
        }
    };

    indices.sort_unstable();
    verify_team_indices(&indices, size)?;

    let elapsed = started.elapsed();
    log::info!(
        "[greeter::run_parallel_region] Team of {} joined in {:?}",
        size,
        elapsed
    );

    Ok(RegionReport {
        team_size: size,
        lines_emitted: lines_written(sink) - lines_before,
        indices,
        order,
        elapsed,
    })
}

/// Check that `indices` is exactly `{0, .., team_size - 1}`, each once
pub fn verify_team_indices(indices: &[usize], team_size: usize) -> GreeterResult<()> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();

    if sorted.iter().copied().eq(0..team_size) {
        Ok(())
    } else {
        Err(GreeterError::TeamIncomplete {
            expected: team_size,
            observed: sorted,
        })
    }
}
