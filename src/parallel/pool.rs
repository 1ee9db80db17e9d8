//! Rayon thread pool configuration for batch scenario evaluation.
//!
//! Use [WorkerPool::install] to run a batch with a fixed number of threads, or
//! rely on Rayon's default (all CPU cores).

use std::env;

use rayon::ThreadPoolBuilder;

pub const WORKERS_ENV: &str = "RELICSIM_WORKERS";

/// Configures how many worker threads are used for parallel batch execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

impl WorkerPool {
    /// Use all available CPU cores (Rayon default).
    pub fn default_workers() -> Self {
        Self::default()
    }

    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Worker count from `RELICSIM_WORKERS`; unset or unparsable means Rayon default.
    pub fn from_env() -> Self {
        match env::var(WORKERS_ENV) {
            Ok(raw) => Self::from_setting(&raw),
            Err(_) => Self::default(),
        }
    }

    fn from_setting(raw: &str) -> Self {
        match raw.trim().parse::<usize>() {
            Ok(workers) => Self::with_workers(workers),
            Err(_) => {
                tracing::warn!(value = raw, "ignoring invalid {WORKERS_ENV}");
                Self::default()
            }
        }
    }

    /// Run a closure on a thread pool with this worker count. If [workers](WorkerPool::workers) is 0,
    /// uses the global Rayon pool (all cores). Otherwise builds a temporary pool with that many
    /// threads, falling back to the global pool if it cannot be built.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            return f();
        }
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => pool.install(f),
            Err(err) => {
                tracing::warn!(workers = self.workers, error = %err, "falling back to global pool");
                f()
            }
        }
    }
}
