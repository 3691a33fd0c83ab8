//! Rayon thread pool configuration for sweeps and multi-trial estimates.
//!
//! Build a [WorkerPool] once per run and hand it to every parallel stage;
//! [WorkerPool::install] reuses the same threads on each call.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

/// Worker threads parallel sweep work may use.
#[derive(Debug, Clone, Default)]
pub struct WorkerPool {
    workers: usize,
    /// `None` runs on the global Rayon pool.
    pool: Option<Arc<ThreadPool>>,
}

impl WorkerPool {
    /// Build a pool with exactly `n` worker threads. 0 means the Rayon default (num_cpus).
    /// If the build fails the pool logs and runs on the global Rayon pool instead.
    pub fn with_workers(n: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        match ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => Self {
                workers: n,
                pool: Some(Arc::new(pool)),
            },
            Err(err) => {
                tracing::warn!(workers = n, %err, "falling back to global rayon pool");
                Self::default()
            }
        }
    }

    /// Requested worker count; 0 when running on the global pool.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run a closure on this pool's threads.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}
