//! This module contains the `StatsCollector` the actors feed during the
//! run and the `SimulationReport` derived from it once everyone has
//! terminated. Each counter is mutated only inside its own exclusion
//! boundary and only grows.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

#[derive(Debug, Default)]
pub struct StatsCollector {
    turned_away: AtomicUsize,
    cumulative_wait: Mutex<Duration>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_turned_away(&self) {
        self.turned_away.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_wait(&self, waited: Duration) {
        *self.cumulative_wait.lock().unwrap() += waited;
    }

    pub fn turned_away(&self) -> usize {
        self.turned_away.load(Ordering::Relaxed)
    }

    pub fn cumulative_wait(&self) -> Duration {
        *self.cumulative_wait.lock().unwrap()
    }
}

/// Final numbers of a completed run, read only after every actor joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub total_customers: usize,
    pub served: usize,
    pub turned_away: usize,
    pub cumulative_wait: Duration,
}

impl SimulationReport {
    /// Mean time served customers spent waiting, or `None` when nobody
    /// was served (an average over zero customers has no value).
    pub fn average_wait(&self) -> Option<Duration> {
        if self.served == 0 {
            None
        } else {
            Some(self.cumulative_wait / self.served as u32)
        }
    }
}
