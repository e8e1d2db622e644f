pub const DEFAULT_SEATS: usize = 10;
pub const DEFAULT_CUSTOMERS: usize = 20;

/// Haircut styles the barber offers, by how long each one takes.
pub const HAIRCUT_DURATIONS_MS: [u64; 4] = [500, 1000, 2000, 3000];

/// A new customer arrives every `step * random(0..ARRIVAL_DELAY_STEPS)`.
pub const ARRIVAL_DELAY_STEP_MS: u64 = 1000;
pub const ARRIVAL_DELAY_STEPS: u32 = 4;
