//! This module contains the `WaitingRoom`, the bounded seat pool customers
//! contend for on arrival.
//!
//! Both the check-and-take and the release run under a single mutex, so the
//! seat count can never be observed outside `0..=capacity`.

use std::{error::Error, fmt, sync::Mutex};

#[derive(Debug, PartialEq, Eq)]
pub enum WaitingRoomError {
    TooManySeatsReleased,
}

impl fmt::Display for WaitingRoomError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for WaitingRoomError {}

#[derive(Debug)]
pub struct WaitingRoom {
    capacity: usize,
    available_seats: Mutex<usize>,
}

impl WaitingRoom {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            available_seats: Mutex::new(capacity),
        }
    }

    /// Takes a seat if one is free. Check and decrement happen in one
    /// critical section; on failure nothing is mutated.
    pub fn try_take_seat(&self) -> bool {
        let mut available_seats = self.available_seats.lock().unwrap();
        if *available_seats >= 1 {
            *available_seats -= 1;
            true
        } else {
            false
        }
    }

    /// Frees the seat of the customer the barber has committed to serve.
    /// Only the barber calls this, once per consumed announcement, so
    /// going past `capacity` means the protocol was broken somewhere.
    pub fn release_seat(&self) -> Result<(), WaitingRoomError> {
        let mut available_seats = self.available_seats.lock().unwrap();
        if *available_seats >= self.capacity {
            return Err(WaitingRoomError::TooManySeatsReleased);
        }
        *available_seats += 1;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot for narration; stale by the time it is printed.
    pub fn available_seats(&self) -> usize {
        *self.available_seats.lock().unwrap()
    }
}
