//! richcontext CLI entry point.

use clap::Parser;

use richcontext::cli::Cli;
use richcontext::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = LoggerImpl::init(&LogConfig::default()) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    if let Err(err) = richcontext::cli::execute(&cli) {
        richcontext::cli::handle_error(err, cli.json);
    }
}
