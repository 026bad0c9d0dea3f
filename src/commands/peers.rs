//! `consul-peers` command.

use std::io::{self, Write};

use crate::cli::PeersCli;
use crate::context::ServiceContext;
use crate::{Error, Result};

/// Look up instances on the live agent and print them to stdout.
///
/// # Errors
///
/// Returns an error if the catalog request fails or output cannot be written.
pub fn run(cli: &PeersCli) -> Result<()> {
    let ctx = ServiceContext::live(&cli.consul.consul_base_url);
    run_with_context(&ctx, &cli.name, &mut io::stdout().lock())
}

/// Print one `address port` line per registered instance of `name`.
///
/// # Errors
///
/// Returns an error if the catalog request fails or output cannot be written.
pub fn run_with_context<W: Write>(ctx: &ServiceContext, name: &str, out: &mut W) -> Result<()> {
    let instances = super::block_on(ctx.registry.instances(name))??;
    tracing::debug!(name, count = instances.len(), "catalog lookup complete");

    for instance in &instances {
        writeln!(out, "{} {}", instance.address, instance.port).map_err(Error::Output)?;
    }
    Ok(())
}
