//! Lists the registered instances of a service as `address port` lines.
//!
//! Usage: `consul-peers --name <service> [--consul-base-url <url>]`

use std::process::ExitCode;

use consul_register::{report, Error};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    match consul_register::run_peers(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {}", report(&err));
            ExitCode::FAILURE
        }
    }
}
