//! netcli-server
//!
//! Entry point: resolves the configuration and sets up logging.

use std::process::ExitCode;

use netcli_server::config;

mod app;

use app::{as_clap_exit, exit_code, print_config_error, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            if let Some(clap_err) = as_clap_exit(&e) {
                clap_err.exit();
            }
            print_config_error(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.logging);
    tracing::info!("{config}");

    exit_code::SUCCESS
}
