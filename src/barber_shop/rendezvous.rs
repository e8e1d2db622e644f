//! This module contains the `RendezvousChannel`, the paired signals that
//! synchronize one seated customer with the barber for one service.
//!
//! Both signals are counting semaphores: several customers may announce
//! themselves before the barber drains the first one, and every
//! announcement pairs with exactly one service. Wake-up order among
//! blocked waiters is left to the platform condition variable.

use crate::barber_shop::customsync::custom_semaphore::Semaphore;

#[derive(Debug)]
pub struct RendezvousChannel {
    customer_ready: Semaphore,
    barber_ready: Semaphore,
}

impl Default for RendezvousChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl RendezvousChannel {
    pub fn new() -> Self {
        Self {
            customer_ready: Semaphore::new(0),
            barber_ready: Semaphore::new(0),
        }
    }

    /// A customer that secured a seat announces itself, once.
    pub fn announce_customer(&self) {
        self.customer_ready.release();
    }

    /// Blocks the barber until some customer has announced itself.
    pub fn wait_for_customer(&self) {
        self.customer_ready.acquire();
    }

    /// The barber, having freed the seat, calls one waiting customer in.
    pub fn signal_barber_ready(&self) {
        self.barber_ready.release();
    }

    /// Blocks a seated customer until the barber calls it in.
    pub fn wait_for_barber(&self) {
        self.barber_ready.acquire();
    }

    /// Posts one extra customer-ready permit so a barber blocked in
    /// `wait_for_customer` can notice that the shop is closing. Called
    /// only after every customer has resolved.
    pub fn announce_closing(&self) {
        self.customer_ready.release();
    }
}
