use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reject filters `EnvFilter` would not accept, so a typo is reported instead of ignored.
fn parse_log_filter(value: &str) -> Result<String, String> {
    EnvFilter::try_new(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid log filter {value:?}: {e}"))
}

#[derive(Parser, Debug)]
#[command(name = "stash-qmt", version, about = "Apply tag templates to Stash scenes")]
pub struct CliArgs {
    /// Config file (default: config.yaml next to the executable)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter for stderr and the log panel (e.g. info, debug, stash_qmt=trace)
    #[arg(long, default_value = "info", value_parser = parse_log_filter)]
    pub log_level: String,
}
