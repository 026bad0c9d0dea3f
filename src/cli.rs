//! CLI argument definitions.

use clap::{Args, Parser};

use crate::registration::RegisterRequest;

/// Agent address used when neither the flag nor `CONSUL_BASE_URL` is set.
pub const DEFAULT_CONSUL_BASE_URL: &str = "http://consul:8500";

/// Options shared by every binary that talks to the agent.
#[derive(Debug, Args)]
pub struct ConsulArgs {
    /// Base URL (without trailing slash) for the Consul HTTP API.
    #[arg(long, env = "CONSUL_BASE_URL", default_value = DEFAULT_CONSUL_BASE_URL)]
    pub consul_base_url: String,
    /// Log debug details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Top-level CLI parser for `register-service`.
#[derive(Debug, Parser)]
#[command(name = "register-service", version, about = "Register a service with Consul")]
pub struct RegisterCli {
    /// Agent connection options.
    #[command(flatten)]
    pub consul: ConsulArgs,
    /// Name of the service to register.
    #[arg(long)]
    pub name: String,
    /// Ports for the service to register.
    #[arg(long, num_args = 1.., required = true)]
    pub port: Vec<u16>,
    /// Address of the service to register [default: this machine's IP address]
    #[arg(long)]
    pub address: Option<String>,
}

impl RegisterCli {
    /// Converts the parsed flags into a registration request.
    #[must_use]
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            ports: self.port.clone(),
            address: self.address.clone(),
        }
    }
}

/// Top-level CLI parser for `consul-peers`.
#[derive(Debug, Parser)]
#[command(name = "consul-peers", version, about = "List the registered instances of a service")]
pub struct PeersCli {
    /// Agent connection options.
    #[command(flatten)]
    pub consul: ConsulArgs,
    /// Name of the service to look up.
    #[arg(long)]
    pub name: String,
}
