use roster_config::Config;
use roster_demo::{Cli, DemoError, DemoResult, app, logger};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: Cli) -> DemoResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_deref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| DemoError::Logger {
            message: format!("Failed to create log directory {}: {}", dir.display(), e),
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting roster-demo v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if let Some(row_id) = app::run(&config, &cli).await? {
        println!("Inserted with id {row_id}");
    }

    Ok(())
}
