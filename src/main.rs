use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    prophash::cli::run_extract(std::env::args().skip(1))
}
