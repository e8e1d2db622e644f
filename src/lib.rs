//! Barber Shop is an application that simulates the classic sleeping
//! barber problem: one barber, a bounded waiting room and a stream of
//! customers arriving at random intervals. A customer that finds a free
//! seat waits for the barber's call; one that finds the room full leaves
//! immediately and is counted as turned away.
//!
//! The barber blocks while nobody is waiting instead of spinning, and the
//! seat count is only ever touched inside one critical section, so it can
//! never go negative nor past the configured capacity. When the last
//! customer has resolved, the shop closes and prints the average waiting
//! time of the served customers along with how many had to leave.

pub mod barber_shop;

use std::{error::Error, fmt};

use colored::Colorize;
use tracing::{error, info, warn};

use barber_shop::{
    config::SimulationConfig,
    constants::{DEFAULT_CUSTOMERS, DEFAULT_SEATS},
    handler, input_handler,
    stats::SimulationReport,
};

#[derive(Debug)]
pub enum BarberShopError {
    ArgsParsingError(String),
    InputError(String),
    ConfigError(String),
    SystemError(String),
}

impl fmt::Display for BarberShopError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for BarberShopError {}

fn init_logger() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn parse_args() -> Result<SimulationConfig, BarberShopError> {
    let mut args: Vec<String> = std::env::args().collect();
    args.remove(0);

    let (seats, customers, seed) = if args.is_empty() {
        let (seats, customers) = input_handler::prompt_simulation_values()
            .map_err(|err| BarberShopError::InputError(err.to_string()))?;
        (seats, customers, None)
    } else {
        parse_flag_args(&args)?
    };

    if customers == 0 {
        error!("[BarberShop] Invalid number of customers: {}", customers);
        return Err(BarberShopError::ArgsParsingError(String::from(
            "There must be at least one customer",
        )));
    }

    let mut config = SimulationConfig::new(seats, customers);
    config.seed = seed;
    Ok(config)
}

fn parse_flag_args(args: &[String]) -> Result<(usize, usize, Option<u64>), BarberShopError> {
    let mut seats = DEFAULT_SEATS;
    let mut customers = DEFAULT_CUSTOMERS;
    let mut seed = None;

    if args.len() % 2 != 0 {
        error!("[BarberShop] Invalid arguments");
        warn!("Usage: cargo run -- -s <seats> -c <customers> -r <seed>");
        return Err(BarberShopError::ArgsParsingError(String::from(
            "Invalid argument.",
        )));
    }

    for arg in args.chunks_exact(2) {
        if arg[0] == "-s" {
            seats = arg[1].parse::<usize>().map_err(|err| {
                error!("[BarberShop] Invalid number of seats: {}", err);
                BarberShopError::ArgsParsingError(String::from("Invalid number of seats"))
            })?;
            info!("[BarberShop] Number of seats given: {}", seats);
        } else if arg[0] == "-c" {
            customers = arg[1].parse::<usize>().map_err(|err| {
                error!("[BarberShop] Invalid number of customers: {}", err);
                BarberShopError::ArgsParsingError(String::from("Invalid number of customers"))
            })?;
            info!("[BarberShop] Number of customers given: {}", customers);
        } else if arg[0] == "-r" {
            let seed_value = arg[1].parse::<u64>().map_err(|err| {
                error!("[BarberShop] Invalid seed: {}", err);
                BarberShopError::ArgsParsingError(String::from("Invalid seed"))
            })?;
            info!("[BarberShop] Seed given: {}", seed_value);
            seed = Some(seed_value);
        } else {
            error!("[BarberShop] Invalid argument: {}", arg[0].to_owned());
            warn!("Usage: cargo run -- -s <seats> -c <customers> -r <seed>");
            return Err(BarberShopError::ArgsParsingError(String::from(
                "Invalid argument.",
            )));
        }
    }

    Ok((seats, customers, seed))
}

fn print_summary(report: &SimulationReport) {
    println!(
        "{}",
        "------------------------------------------------"
            .magenta()
            .bold()
    );
    match report.average_wait() {
        Some(average) => println!(
            "{}",
            format!(
                "Average customers' waiting time: {:.3} ms.",
                average.as_secs_f64() * 1000.0
            )
            .magenta()
            .bold()
        ),
        None => println!("{}", "No customers were served.".magenta().bold()),
    }
    println!(
        "{}",
        format!(
            "Number of customers that were forced to leave: {}",
            report.turned_away
        )
        .magenta()
        .bold()
    );
}

pub fn run() -> Result<(), BarberShopError> {
    init_logger();
    let config = parse_args()?;
    let report = handler::start(config)?;
    print_summary(&report);
    Ok(())
}
