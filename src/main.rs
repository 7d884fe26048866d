//! parallel-greeter
//!
//! Prints `Hello World... from thread = <i>` once per worker of a parallel
//! team. Team size comes from `OMP_NUM_THREADS` (or the hardware context count),
//! capped by `OMP_THREAD_LIMIT`. Logs go to stderr, controlled by `RUST_LOG`.

use anyhow::Context;
use parallel_greeter::constants::exit;
use parallel_greeter::{
    create_line_writer, load_config_from_env, run_greeter, GreeterError, RegionReport,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(report) => {
            log::info!(
                "[main] {} of {} workers reported in {:?}",
                report.lines_emitted,
                report.team_size,
                report.elapsed
            );
            std::process::exit(exit::SUCCESS);
        }
        Err(e) => {
            eprintln!("parallel-greeter: {:#}", e);
            let code = e
                .downcast_ref::<GreeterError>()
                .map(GreeterError::exit_code)
                .unwrap_or(exit::FAILURE);
            std::process::exit(code);
        }
    }
}

fn run() -> anyhow::Result<RegionReport> {
    let config = load_config_from_env().context("resolving configuration")?;
    let sink = create_line_writer(std::io::stdout());
    let report = run_greeter(&config, &sink).context("running parallel region")?;
    Ok(report)
}
