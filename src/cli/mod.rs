//! Command-line interface for inspecting experiment configuration files.

pub mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::config::ConfigLoader;
use output::{output, ConfigReport};

/// Load an experiment configuration file and print its parameters.
#[derive(Parser, Debug)]
#[command(name = "richcontext", version, about)]
pub struct Cli {
    /// Path to the experiment YAML file
    pub config: PathBuf,

    /// Print the parameters as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load the configuration named on the command line and print it.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = ConfigLoader::load(&cli.config).with_context(|| {
        format!(
            "Experiment configuration {} could not be loaded",
            cli.config.display()
        )
    })?;

    let report = ConfigReport::new(&cli.config, config);
    output(&report, cli.json);
    Ok(())
}

/// Report a failed run on stderr and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": err.to_string(),
            "causes": chain.get(1..).unwrap_or_default(),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
