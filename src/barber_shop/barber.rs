//! This module contains the barber, the single consumer actor. It sleeps
//! (blocks) while nobody is waiting, and for each announced customer it
//! frees that customer's seat, calls the customer in and performs the
//! service.

use std::{
    error::Error,
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::barber_shop::{
    rendezvous::RendezvousChannel, service_station::ServiceStation, waiting_room::WaitingRoom,
};

#[derive(Debug)]
pub enum BarberError {
    SeatAccountingError(String),
}

impl fmt::Display for BarberError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for BarberError {}

#[derive(Debug)]
pub struct Barber {
    waiting_room: Arc<WaitingRoom>,
    rendezvous: Arc<RendezvousChannel>,
    service_station: Arc<ServiceStation>,
    closing_time: Arc<AtomicBool>,
    rng: StdRng,
}

impl Barber {
    pub fn new(
        waiting_room: Arc<WaitingRoom>,
        rendezvous: Arc<RendezvousChannel>,
        service_station: Arc<ServiceStation>,
        closing_time: Arc<AtomicBool>,
        rng: StdRng,
    ) -> Self {
        Self {
            waiting_room,
            rendezvous,
            service_station,
            closing_time,
            rng,
        }
    }

    /// Serves customers until closing time, returning how many haircuts
    /// were completed.
    ///
    /// The loop does not guess when it is done from counters that are
    /// still being mutated; it exits only when the supervisor, having
    /// joined every customer, raises the closing flag and posts one last
    /// wake-up through the rendezvous. By then every real announcement
    /// has already been consumed.
    pub fn run(mut self) -> Result<usize, BarberError> {
        let mut customers_served = 0;

        loop {
            debug!("[Barber] Waiting for a customer");
            self.rendezvous.wait_for_customer();

            if self.closing_time.load(Ordering::Acquire) {
                break;
            }

            // The customer leaves the waiting area the moment its service
            // rendezvous begins, not when the haircut ends.
            self.waiting_room
                .release_seat()
                .map_err(|err| BarberError::SeatAccountingError(err.to_string()))?;
            self.rendezvous.signal_barber_ready();

            self.service_station.serve(&mut self.rng);
            customers_served += 1;
            info!("[Barber] A customer was served, the barber is calling a new customer");
        }

        info!(
            "[Barber] Closing time after {} haircuts",
            customers_served
        );
        Ok(customers_served)
    }
}
