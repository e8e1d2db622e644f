//! This module contains the `ServiceStation`, where the actual haircut
//! happens. The barber chair mutex keeps the service routine mutually
//! exclusive; with a single barber it is never contended, but the station
//! stays correct if more barbers are ever hired.

use std::{sync::Mutex, thread, time::Duration};

use rand::{rngs::StdRng, Rng};
use tracing::info;

#[derive(Debug)]
pub struct ServiceStation {
    barber_chair: Mutex<()>,
    haircut_durations: Vec<Duration>,
}

impl ServiceStation {
    pub fn new(haircut_durations: Vec<Duration>) -> Self {
        Self {
            barber_chair: Mutex::new(()),
            haircut_durations,
        }
    }

    /// Performs one haircut: draws a style uniformly from the table,
    /// sleeps for its duration and returns it. No other side effects.
    pub fn serve(&self, rng: &mut StdRng) -> Duration {
        let _chair = self.barber_chair.lock().unwrap();

        let style = rng.gen_range(0..self.haircut_durations.len());
        let duration = self.haircut_durations[style];
        info!(
            "[Barber] Customer selected cut hair {} ({:?})",
            style + 1,
            duration
        );
        thread::sleep(duration);
        duration
    }
}

#[cfg(test)]
mod tests_service_station {
    use super::*;

    use rand::SeedableRng;
    use std::{sync::Arc, time::Instant};

    #[test]
    fn test_served_duration_comes_from_the_table() {
        let durations = vec![Duration::from_millis(2), Duration::from_millis(4)];
        let station = ServiceStation::new(durations.clone());
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..8 {
            let served = station.serve(&mut rng);
            assert!(durations.contains(&served));
        }
    }

    #[test]
    fn test_concurrent_services_do_not_overlap() {
        let station = Arc::new(ServiceStation::new(vec![Duration::from_millis(50)]));
        let station_clone = station.clone();

        let started = Instant::now();
        let other_barber = thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(1);
            station_clone.serve(&mut rng);
        });
        let mut rng = StdRng::seed_from_u64(2);
        station.serve(&mut rng);
        other_barber.join().unwrap();

        // Two 50 ms cuts through one chair cannot finish in under 100 ms.
        assert!(started.elapsed() >= Duration::from_millis(100));
    }
}
