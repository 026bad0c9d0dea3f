//! Binary entrypoint for `register-service`.

use std::process::ExitCode;

use consul_register::{report, Error};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    match consul_register::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {}", report(&err));
            ExitCode::FAILURE
        }
    }
}
