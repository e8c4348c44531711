//! stash-qmt entrypoint.
//!
//! Parses arguments, loads the configuration and opens the tagging window.
//! For programmatic use, prefer the library API (`stash_qmt::api`, `stash_qmt::form`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
