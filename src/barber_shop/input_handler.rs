use std::{
    error::Error,
    fmt,
    io::{self, BufRead, Write},
};

#[derive(Debug)]
pub enum InputError {
    ReadError(String),
    ParseError(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for InputError {}

/// Asks on the terminal for the two values the simulation needs, in the
/// order the shop has always asked for them: seats first, customers next.
pub fn prompt_simulation_values() -> Result<(usize, usize), InputError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let seats = prompt_value(&mut lines, "Please enter the number of seats: ")?;
    let customers = prompt_value(&mut lines, "Please enter the number of customers: ")?;

    Ok((seats, customers))
}

fn prompt_value(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
) -> Result<usize, InputError> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|err| InputError::ReadError(err.to_string()))?;

    let line = lines
        .next()
        .ok_or_else(|| InputError::ReadError("Unexpected end of input.".to_string()))?
        .map_err(|err| InputError::ReadError(err.to_string()))?;

    line.trim()
        .parse::<usize>()
        .map_err(|err| InputError::ParseError(err.to_string()))
}
