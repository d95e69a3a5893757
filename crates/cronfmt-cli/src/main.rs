mod config;
mod render;

use std::process::ExitCode;

use clap::Parser;
use cronfmt::CronRecord;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    match run(&config) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!(error = %err, "cron expression rejected");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<String> {
    debug!(args = ?config.args, output = ?config.output, "parsing cron line");
    let record = CronRecord::from_args(config.args.as_slice())?;
    render::render(&record, config.output)
}
