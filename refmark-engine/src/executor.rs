//! Order-preserving fan-out over a worker pool

use crate::error::Result;
#[cfg(feature = "parallel")]
use crate::error::EngineError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs independent per-item work, in parallel when the `parallel`
/// feature is enabled
pub struct Executor {
    threads: usize,
    #[cfg(feature = "parallel")]
    pool: rayon::ThreadPool,
}

impl Executor {
    /// Build an executor with `threads` workers (None = all available)
    #[cfg(feature = "parallel")]
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let threads = threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
        Ok(Self { threads, pool })
    }

    /// Build a sequential executor
    #[cfg(not(feature = "parallel"))]
    pub fn new(_threads: Option<usize>) -> Result<Self> {
        Ok(Self { threads: 1 })
    }

    /// Worker count
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Apply `f` to every item; results keep the order of `items`
    pub fn map<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        {
            if self.threads > 1 && items.len() > 1 {
                return self.pool.install(|| items.par_iter().map(f).collect());
            }
        }
        items.iter().map(f).collect()
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("threads", &self.threads)
            .finish()
    }
}
