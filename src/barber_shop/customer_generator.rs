//! This module contains the `CustomerGenerator`, the producer side of the
//! shop. It launches every customer thread, separated by randomized
//! delays, and hands each join handle to the supervisor so no customer is
//! ever orphaned. It does not wait for customers to finish, only to be
//! started.

use std::{
    error::Error,
    fmt,
    sync::{mpsc::Sender, Arc},
    thread::{self, JoinHandle},
    time::Duration,
};

use rand::{rngs::StdRng, Rng};
use tracing::{debug, error, info};

use crate::barber_shop::{
    constants::ARRIVAL_DELAY_STEPS,
    customer::{Customer, CustomerOutcome},
    rendezvous::RendezvousChannel,
    stats::StatsCollector,
    waiting_room::WaitingRoom,
};

#[derive(Debug)]
pub enum CustomerGeneratorError {
    SendError(String),
}

impl fmt::Display for CustomerGeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for CustomerGeneratorError {}

#[derive(Debug)]
pub struct CustomerGenerator {
    total_customers: usize,
    arrival_delay_step: Duration,
    waiting_room: Arc<WaitingRoom>,
    rendezvous: Arc<RendezvousChannel>,
    stats: Arc<StatsCollector>,
    rng: StdRng,
}

impl CustomerGenerator {
    pub fn new(
        total_customers: usize,
        arrival_delay_step: Duration,
        waiting_room: Arc<WaitingRoom>,
        rendezvous: Arc<RendezvousChannel>,
        stats: Arc<StatsCollector>,
        rng: StdRng,
    ) -> Self {
        Self {
            total_customers,
            arrival_delay_step,
            waiting_room,
            rendezvous,
            stats,
            rng,
        }
    }

    /// Launches every customer, sending each join handle to the
    /// supervisor as soon as the thread exists. A failed spawn is
    /// reported and skipped; the run continues with fewer customers
    /// than requested.
    pub fn run(
        mut self,
        handle_sender: Sender<JoinHandle<CustomerOutcome>>,
    ) -> Result<(), CustomerGeneratorError> {
        for id in 1..=self.total_customers {
            let customer = Customer::new(
                id,
                self.waiting_room.clone(),
                self.rendezvous.clone(),
                self.stats.clone(),
            );

            debug!("[CustomerGenerator] Launching customer {}", id);
            let spawned = thread::Builder::new()
                .name(format!("customer-{}", id))
                .spawn(move || customer.run());

            match spawned {
                Ok(handle) => handle_sender
                    .send(handle)
                    .map_err(|err| CustomerGeneratorError::SendError(err.to_string()))?,
                Err(err) => {
                    error!(
                        "[CustomerGenerator] Failed to create a thread for customer {}: {}",
                        id, err
                    );
                }
            }

            let delay_steps: u32 = self.rng.gen_range(0..ARRIVAL_DELAY_STEPS);
            let delay = self.arrival_delay_step * delay_steps;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        info!(
            "[CustomerGenerator] All {} customers have been launched",
            self.total_customers
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests_customer_generator {
    use super::*;

    use rand::SeedableRng;
    use std::sync::mpsc::channel;

    #[test]
    fn test_generator_launches_every_requested_customer() {
        let stats = Arc::new(StatsCollector::new());
        let generator = CustomerGenerator::new(
            3,
            Duration::ZERO,
            Arc::new(WaitingRoom::new(0)),
            Arc::new(RendezvousChannel::new()),
            stats.clone(),
            StdRng::seed_from_u64(3),
        );

        let (handle_sender, handle_receiver) = channel();
        generator.run(handle_sender).unwrap();

        let outcomes: Vec<CustomerOutcome> = handle_receiver
            .iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        // With no seats every launched customer resolves on its own.
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes
            .iter()
            .all(|outcome| *outcome == CustomerOutcome::TurnedAway));
        assert_eq!(stats.turned_away(), 3);
    }

    #[test]
    fn test_generator_with_no_customers_launches_nobody() {
        let generator = CustomerGenerator::new(
            0,
            Duration::ZERO,
            Arc::new(WaitingRoom::new(1)),
            Arc::new(RendezvousChannel::new()),
            Arc::new(StatsCollector::new()),
            StdRng::seed_from_u64(3),
        );

        let (handle_sender, handle_receiver) = channel();
        generator.run(handle_sender).unwrap();

        assert_eq!(handle_receiver.iter().count(), 0);
    }
}
