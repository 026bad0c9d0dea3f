//! Live adapter for the `AddressResolver` port.

use std::net::{IpAddr, ToSocketAddrs};

use crate::ports::AddressResolver;
use crate::{Error, Result};

/// Resolves the machine's hostname through the system resolver.
pub struct HostnameAddressResolver;

/// Picks the advertised address: first IPv4 result, else the first result.
pub(crate) fn pick_address(addrs: &[IpAddr]) -> Option<IpAddr> {
    addrs.iter().find(|addr| addr.is_ipv4()).or_else(|| addrs.first()).copied()
}

impl AddressResolver for HostnameAddressResolver {
    fn local_address(&self) -> Result<String> {
        let hostname = nix::unistd::gethostname()
            .map_err(|e| Error::AddressResolution(format!("hostname lookup failed: {e}")))?
            .into_string()
            .map_err(|_| Error::AddressResolution("hostname is not valid UTF-8".into()))?;

        let addrs: Vec<IpAddr> = (hostname.as_str(), 0)
            .to_socket_addrs()
            .map_err(|e| Error::AddressResolution(format!("failed to resolve {hostname}: {e}")))?
            .map(|addr| addr.ip())
            .collect();

        pick_address(&addrs)
            .map(|ip| ip.to_string())
            .ok_or_else(|| Error::AddressResolution(format!("{hostname} resolved to no addresses")))
    }
}
