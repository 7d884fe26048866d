//! Thread Pool Operations - Pure DOP Functions
//!
//! Teams are built on a dedicated `rayon::ThreadPool`, never on rayon's global
//! pool, so the team size is whatever the caller passed in.

use super::thread_pool_data::{TeamPoolConfig, TeamPoolData, WorkerTask};
use crate::constants::team::MAX_TEAM_SIZE;
use crate::error::{GreeterError, GreeterResult};

/// Build a worker team of exactly `config.team_size` threads
pub fn create_team_pool(config: TeamPoolConfig) -> GreeterResult<TeamPoolData> {
    let requested = config.team_size;

    if requested == 0 {
        return Err(GreeterError::InvalidConfig {
            field: "team_size".to_string(),
            value: "0".to_string(),
            reason: "a team needs at least one worker".to_string(),
        });
    }

    let max = max_team_size();
    if requested > max {
        return Err(GreeterError::RuntimeInitialization {
            requested,
            reason: format!("team size exceeds the maximum of {}", max),
        });
    }

    log::debug!(
        "[thread_pool::create_team_pool] Building team of {} ({}-*)",
        requested,
        config.thread_name_prefix
    );

    let prefix = config.thread_name_prefix;
    let mut builder = rayon::ThreadPoolBuilder::new()
        .num_threads(requested)
        .thread_name(move |i| format!("{}-{}", prefix, i));

    if let Some(stack_size) = config.stack_size {
        builder = builder.stack_size(stack_size);
    }

    let pool = builder
        .build()
        .map_err(|e| GreeterError::RuntimeInitialization {
            requested,
            reason: e.to_string(),
        })?;

    // Team must be exactly the requested size
    if pool.current_num_threads() != requested {
        return Err(GreeterError::RuntimeInitialization {
            requested,
            reason: format!("runtime provided {} threads", pool.current_num_threads()),
        });
    }

    log::info!(
        "[thread_pool::create_team_pool] Team of {} initialized",
        requested
    );

    Ok(TeamPoolData {
        pool,
        team_size: requested,
    })
}

/// Largest team that can be built: `MAX_TEAM_SIZE`, or less when rayon's own
/// thread cap is lower (255 on 32-bit targets)
pub fn max_team_size() -> usize {
    MAX_TEAM_SIZE.min(rayon::max_num_threads())
}

pub fn team_size(data: &TeamPoolData) -> usize {
    data.team_size
}

/// Run `op` exactly once on every team thread and wait for all of them.
///
/// Results are returned ordered by worker index. A panic in any worker is
/// resumed on the caller after the join.
pub fn fork_join<OP, R>(data: &TeamPoolData, op: OP) -> Vec<R>
where
    OP: Fn(WorkerTask) -> R + Sync,
    R: Send,
{
    let team_size = data.team_size;

    data.pool.broadcast(|ctx| {
        let task = WorkerTask {
            index: ctx.index(),
            team_size,
        };
        log::debug!(
            "[thread_pool::fork_join] Worker {} of {} started",
            task.index,
            task.team_size
        );
        op(task)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashSet;

    fn team_of(team_size: usize) -> TeamPoolData {
        create_team_pool(TeamPoolConfig {
            team_size,
            ..TeamPoolConfig::default()
        })
        .expect("Failed to create team")
    }

    #[test]
    fn test_team_size_is_exact() {
        for size in [1, 2, 4, 7] {
            let team = team_of(size);
            assert_eq!(team_size(&team), size);
        }
    }

    #[test]
    fn test_fork_join_runs_every_index_once() {
        let team = team_of(4);
        let seen = Mutex::new(Vec::new());

        let results = fork_join(&team, |task| {
            seen.lock().push(task.index);
            task.index * 10
        });

        assert_eq!(results, vec![0, 10, 20, 30]);

        let mut seen = seen.into_inner();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_workers_run_on_distinct_threads() {
        let team = team_of(3);
        let names = fork_join(&team, |_| {
            std::thread::current()
                .name()
                .map(str::to_string)
                .unwrap_or_default()
        });

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(names.iter().all(|n| n.starts_with("greeter-worker-")));
    }

    #[test]
    fn test_worker_sees_team_size() {
        let team = team_of(5);
        let sizes = fork_join(&team, |task| task.team_size);
        assert!(sizes.iter().all(|&s| s == 5));
    }

    #[test]
    fn test_zero_team_is_rejected() {
        let err = create_team_pool(TeamPoolConfig {
            team_size: 0,
            ..TeamPoolConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, GreeterError::InvalidConfig { .. }));
    }

    #[test]
    fn test_oversized_team_fails_runtime_initialization() {
        let err = create_team_pool(TeamPoolConfig {
            team_size: MAX_TEAM_SIZE + 1,
            ..TeamPoolConfig::default()
        })
        .unwrap_err();
        assert!(err.is_runtime_initialization());
    }

    #[test]
    fn test_max_team_size_respects_rayon_cap() {
        assert!(max_team_size() <= rayon::max_num_threads());
        assert!(max_team_size() <= MAX_TEAM_SIZE);
    }

    #[test]
    fn test_team_above_rayon_cap_is_rejected_before_build() {
        let requested = rayon::max_num_threads() + 1;
        let err = create_team_pool(TeamPoolConfig {
            team_size: requested,
            ..TeamPoolConfig::default()
        })
        .unwrap_err();

        match err {
            GreeterError::RuntimeInitialization {
                requested: r,
                reason,
            } => {
                assert_eq!(r, requested);
                assert!(reason.contains("exceeds the maximum"), "reason: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_thread_spawn_failure_is_runtime_initialization() {
        // No OS can map a 64 TiB stack, so spawning the workers fails
        let err = create_team_pool(TeamPoolConfig {
            team_size: 2,
            stack_size: Some(1 << 46),
            ..TeamPoolConfig::default()
        })
        .unwrap_err();

        match err {
            GreeterError::RuntimeInitialization { requested, reason } => {
                assert_eq!(requested, 2);
                assert!(!reason.contains("exceeds the maximum"), "reason: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
