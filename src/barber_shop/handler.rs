//! This module contains the logic for running one full day of the shop.
//! It wires the shared state together, spawns the barber and the customer
//! generator, owns every join handle, and closes the shop only once all
//! customers have resolved, so the barber's exit can never race the
//! arrivals still in flight.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread,
};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::barber_shop::{
    barber::Barber,
    config::SimulationConfig,
    customer::CustomerOutcome,
    customer_generator::CustomerGenerator,
    rendezvous::RendezvousChannel,
    service_station::ServiceStation,
    stats::{SimulationReport, StatsCollector},
    waiting_room::WaitingRoom,
};
use crate::BarberShopError;

const BARBER_SEED_STREAM: u64 = 0;
const GENERATOR_SEED_STREAM: u64 = 1;

pub fn start(config: SimulationConfig) -> Result<SimulationReport, BarberShopError> {
    if config.haircut_durations.is_empty() {
        return Err(BarberShopError::ConfigError(String::from(
            "The haircut duration table cannot be empty",
        )));
    }

    info!(
        "[BarberShop] Opening with {} seats, expecting {} customers",
        config.seats, config.customers
    );

    let waiting_room = Arc::new(WaitingRoom::new(config.seats));
    let rendezvous = Arc::new(RendezvousChannel::new());
    let service_station = Arc::new(ServiceStation::new(config.haircut_durations.clone()));
    let stats = Arc::new(StatsCollector::new());
    let closing_time = Arc::new(AtomicBool::new(false));

    let barber = Barber::new(
        waiting_room.clone(),
        rendezvous.clone(),
        service_station,
        closing_time.clone(),
        seeded_rng(config.seed, BARBER_SEED_STREAM),
    );
    let barber_handle = thread::Builder::new()
        .name(String::from("barber"))
        .spawn(move || barber.run())
        .map_err(|err| BarberShopError::SystemError(err.to_string()))?;

    let generator = CustomerGenerator::new(
        config.customers,
        config.arrival_delay_step,
        waiting_room,
        rendezvous.clone(),
        stats.clone(),
        seeded_rng(config.seed, GENERATOR_SEED_STREAM),
    );
    let (handle_sender, handle_receiver) = mpsc::channel();
    let generator_handle = thread::Builder::new()
        .name(String::from("customer-generator"))
        .spawn(move || generator.run(handle_sender))
        .map_err(|err| BarberShopError::SystemError(err.to_string()))?;

    // Handles arrive while customers are still being launched; the
    // iterator ends when the generator drops its sender.
    let customer_handles: Vec<_> = handle_receiver.iter().collect();

    generator_handle
        .join()
        .map_err(|_| {
            BarberShopError::SystemError(String::from("The customer generator thread panicked."))
        })?
        .map_err(|err| BarberShopError::SystemError(err.to_string()))?;

    // Served customers only finish after their haircut started, so once
    // this loop is done every arrival has resolved one way or the other.
    let mut served_customers = 0;
    let mut turned_away_customers = 0;
    for handle in customer_handles {
        match handle.join() {
            Ok(CustomerOutcome::Served { .. }) => served_customers += 1,
            Ok(CustomerOutcome::TurnedAway) => turned_away_customers += 1,
            Err(_) => warn!("[BarberShop] A customer thread panicked before resolving"),
        }
    }
    debug!(
        "[BarberShop] Customers resolved: {} served, {} turned away",
        served_customers, turned_away_customers
    );

    closing_time.store(true, Ordering::Release);
    rendezvous.announce_closing();

    let served = barber_handle
        .join()
        .map_err(|_| BarberShopError::SystemError(String::from("The barber thread panicked.")))?
        .map_err(|err| BarberShopError::SystemError(err.to_string()))?;

    if served != served_customers {
        warn!(
            "[BarberShop] The barber counted {} haircuts but {} customers report being served",
            served, served_customers
        );
    }

    let turned_away = stats.turned_away();
    if served + turned_away != config.customers {
        warn!(
            "[BarberShop] {} customers were expected but only {} resolved",
            config.customers,
            served + turned_away
        );
    }

    Ok(SimulationReport {
        total_customers: config.customers,
        served,
        turned_away,
        cumulative_wait: stats.cumulative_wait(),
    })
}

fn seeded_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests_simulation {
    use super::*;

    use std::time::Duration;

    fn fast_config(seats: usize, customers: usize) -> SimulationConfig {
        let mut config = SimulationConfig::new(seats, customers);
        config.seed = Some(42);
        config.haircut_durations = vec![Duration::from_millis(5), Duration::from_millis(10)];
        config.arrival_delay_step = Duration::ZERO;
        config
    }

    #[test]
    fn test01_single_customer_with_one_seat_is_served_ok() {
        let report = start(fast_config(1, 1)).unwrap();

        assert_eq!(report.served, 1);
        assert_eq!(report.turned_away, 0);
        assert!(report.average_wait().is_some());
    }

    #[test]
    fn test02_shop_without_seats_turns_everyone_away_ok() {
        let report = start(fast_config(0, 5)).unwrap();

        assert_eq!(report.served, 0);
        assert_eq!(report.turned_away, 5);
        assert_eq!(report.average_wait(), None);
        assert_eq!(report.cumulative_wait, Duration::ZERO);
    }

    #[test]
    fn test03_single_customer_with_many_seats_is_served_ok() {
        let report = start(fast_config(10, 1)).unwrap();

        assert_eq!(report.served, 1);
        assert_eq!(report.turned_away, 0);
    }

    #[test]
    fn test04_contention_conserves_every_customer_ok() {
        // Twenty near-simultaneous arrivals against two seats and a slow
        // barber: some are served, some turned away, nobody is lost.
        let mut config = fast_config(2, 20);
        config.haircut_durations = vec![Duration::from_millis(100)];

        let report = start(config).unwrap();

        assert_eq!(report.served + report.turned_away, 20);
        assert!(report.served >= 1);
        assert!(report.turned_away >= 1);
    }

    #[test]
    fn test05_empty_haircut_table_err() {
        let mut config = fast_config(1, 1);
        config.haircut_durations.clear();

        assert!(start(config).is_err());
    }
}
