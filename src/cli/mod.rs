//! Startup for the stash-qmt binary.
//!
//! Parses arguments (`args`), then `runner` installs logging, loads and
//! resolves the configuration through the Stash API, and opens the window.
//! Configuration problems end the process before any window is shown.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
