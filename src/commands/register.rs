//! `register-service` command.

use std::io;

use crate::cli::RegisterCli;
use crate::context::ServiceContext;
use crate::registration::register_all;
use crate::Result;

/// Execute the registration against the live agent, printing to stdout.
///
/// # Errors
///
/// Returns the first error hit while registering; remaining ports are skipped.
pub fn run(cli: &RegisterCli) -> Result<()> {
    let ctx = ServiceContext::live(&cli.consul.consul_base_url);
    tracing::debug!(base_url = %cli.consul.consul_base_url, "using Consul agent");
    run_with_context(&ctx, cli, &mut io::stdout().lock())
}

/// Execute the registration with the given service context and output sink.
///
/// # Errors
///
/// Returns the first error hit while registering; remaining ports are skipped.
pub fn run_with_context<W: io::Write>(
    ctx: &ServiceContext,
    cli: &RegisterCli,
    out: &mut W,
) -> Result<()> {
    let receipts = super::block_on(register_all(ctx, &cli.request(), out))??;
    tracing::info!(count = receipts.len(), name = %cli.name, "registration complete");
    Ok(())
}
