//! Register service instances with a Consul agent over its HTTP API.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod ports;
pub mod registration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use error::{report, Error, Result};

/// Run `register-service` with the provided arguments.
///
/// # Errors
///
/// Returns [`Error::Usage`] when argument parsing fails, or the first error
/// hit while registering.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::RegisterCli::try_parse_from(args)?;
    init_tracing(cli.consul.verbose);
    commands::register::run(&cli)
}

/// Run `consul-peers` with the provided arguments.
///
/// # Errors
///
/// Returns [`Error::Usage`] when argument parsing fails, or the catalog
/// lookup error.
pub fn run_peers<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::PeersCli::try_parse_from(args)?;
    init_tracing(cli.consul.verbose);
    commands::peers::run(&cli)
}

/// Install the stderr subscriber. `RUST_LOG` applies unless `verbose` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when running under tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
