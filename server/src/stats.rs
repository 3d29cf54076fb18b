use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use spellingbee::Stats;
use tracing::{debug, info};

/// Counters exported over the `Stats` RPC.
#[derive(Debug, Default)]
pub struct ServerStats {
    dict_size: AtomicI64,
    solves: AtomicU64,
    solutions: Mutex<BTreeMap<u64, u64>>,
}

impl ServerStats {
    pub fn record_solve(&self) {
        self.solves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dict_size(&self) -> i64 {
        self.dict_size.load(Ordering::Relaxed)
    }

    pub fn solves(&self) -> u64 {
        self.solves.load(Ordering::Relaxed)
    }

    /// Query count by solution-set size.
    pub fn solutions(&self) -> BTreeMap<u64, u64> {
        self.solutions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Stats for ServerStats {
    fn record_size(&self, classes: usize) {
        info!(classes, "dictionary size");
        self.dict_size.store(classes as i64, Ordering::Relaxed);
    }

    fn record_solutions(&self, count: usize) {
        debug!(count, "solutions");
        *self
            .solutions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(count as u64)
            .or_default() += 1;
    }
}
