//! This module contains the customer actor. A customer either secures a
//! seat and commits to waiting for the barber, or leaves on the spot.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::{info, warn};

use crate::barber_shop::{
    rendezvous::RendezvousChannel, stats::StatsCollector, waiting_room::WaitingRoom,
};

/// The single terminal state a customer ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerOutcome {
    Served { waited: Duration },
    TurnedAway,
}

#[derive(Debug)]
pub struct Customer {
    id: usize,
    waiting_room: Arc<WaitingRoom>,
    rendezvous: Arc<RendezvousChannel>,
    stats: Arc<StatsCollector>,
}

impl Customer {
    pub fn new(
        id: usize,
        waiting_room: Arc<WaitingRoom>,
        rendezvous: Arc<RendezvousChannel>,
        stats: Arc<StatsCollector>,
    ) -> Self {
        Self {
            id,
            waiting_room,
            rendezvous,
            stats,
        }
    }

    /// Runs the customer to its terminal state. A customer that wins a
    /// seat is fully committed: it blocks until the barber calls it in,
    /// however long that takes. A rejected customer never retries.
    pub fn run(self) -> CustomerOutcome {
        info!("[Customer {}] Arrived at the barber shop", self.id);

        if !self.waiting_room.try_take_seat() {
            self.stats.record_turned_away();
            warn!("[Customer {}] The waiting room is full, leaving", self.id);
            return CustomerOutcome::TurnedAway;
        }

        info!(
            "[Customer {}] Took a seat to wait ({} seats still free)",
            self.id,
            self.waiting_room.available_seats()
        );

        let seated_at = Instant::now();
        self.rendezvous.announce_customer();
        self.rendezvous.wait_for_barber();

        let waited = seated_at.elapsed();
        self.stats.record_wait(waited);
        info!(
            "[Customer {}] Being served after waiting {:?}",
            self.id, waited
        );
        CustomerOutcome::Served { waited }
    }
}
