mod cli;
mod commands;
mod interactive;
mod logging;
mod render;
mod session;

use std::process::ExitCode;

use clap::Parser;
use kinolist_core::config::AppConfig;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kinolist: {e}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = logging::init(&config.logging, cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("kinolist: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(commands::run(&cli, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("kinolist: {e}");
            ExitCode::FAILURE
        }
    }
}
