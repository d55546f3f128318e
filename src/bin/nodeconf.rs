//! nodeconf CLI Binary
//!
//! Resolves the effective node configuration and prints it.

use clap::Parser;
use nodeconf::cli::{map_error, Cli, RunContext};
use nodeconf::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("nodeconf starting");

    let context = RunContext::new(&cli);
    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args.
/// Precedence: explicit flags override --verbose override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
