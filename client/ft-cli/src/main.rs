//! fintrack - FinTrack client CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in (falls back to local accounts when the service is down)
//! fintrack login --email jane@example.com --password secret --remember-me
//!
//! # Load the app page and see where the route guard sends you
//! fintrack open app
//!
//! # Watch connectivity against another service
//! fintrack --api-url http://127.0.0.1:3000/api watch --count 3
//! ```

use ft_cli::{App, Cli, CliError, CliResult, dispatch, logger};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    // Load and validate configuration
    let mut config = ft_config::Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = ft_config::Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir).map_err(|e| {
                CliError::logger(format!(
                    "Failed to create log directory {}: {e}",
                    log_dir.display()
                ))
            })?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;
    config.log_summary();

    // One thread: every handler and timer runs cooperatively on it
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::runtime)?;

    let succeeded = runtime.block_on(async {
        let app = App::new(config)?;
        dispatch::run(cli.command, &app).await
    })?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
