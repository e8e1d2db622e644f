pub mod barber;
pub mod config;
pub mod constants;
pub mod customer;
pub mod customer_generator;
pub mod customsync;
pub mod handler;
pub mod input_handler;
pub mod rendezvous;
pub mod service_station;
pub mod stats;
pub mod waiting_room;
