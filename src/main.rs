fn main() {
    if let Err(err) = barber_shop::run() {
        eprintln!("[BarberShop] The simulation ended with an error: {}", err);
        std::process::exit(1);
    }
}
