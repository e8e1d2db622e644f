use std::time::Duration;

use crate::barber_shop::constants::{ARRIVAL_DELAY_STEP_MS, HAIRCUT_DURATIONS_MS};

/// Values the whole simulation is built from, read once before any actor
/// is spawned. Tests shrink the duration tables and pin the seed.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Seats in the waiting room. Zero is a legal, if inhospitable, shop.
    pub seats: usize,
    /// Customers that will arrive over the course of the run.
    pub customers: usize,
    /// Fixes every random draw of the run when set.
    pub seed: Option<u64>,
    /// Haircut styles on offer; the barber draws one uniformly per service.
    pub haircut_durations: Vec<Duration>,
    /// Customer arrivals are separated by `step * random(0..4)`.
    pub arrival_delay_step: Duration,
}

impl SimulationConfig {
    pub fn new(seats: usize, customers: usize) -> Self {
        Self {
            seats,
            customers,
            seed: None,
            haircut_durations: HAIRCUT_DURATIONS_MS
                .iter()
                .map(|ms| Duration::from_millis(*ms))
                .collect(),
            arrival_delay_step: Duration::from_millis(ARRIVAL_DELAY_STEP_MS),
        }
    }
}
