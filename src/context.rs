//! Service context bundling all port trait objects.

use crate::adapters::live::{uuid_suffix, ConsulClient, HostnameAddressResolver};
use crate::ports::{AddressResolver, IdGenerator, ServiceRegistry};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. [`ServiceContext::live`]
/// wires the real adapters; tests build one from the memory adapters.
pub struct ServiceContext {
    /// Registry that receives registrations.
    pub registry: Box<dyn ServiceRegistry>,
    /// Generator for the unique part of each instance ID.
    pub id_gen: Box<dyn IdGenerator>,
    /// Resolver for the advertised address when none is given.
    pub address: Box<dyn AddressResolver>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(
        registry: Box<dyn ServiceRegistry>,
        id_gen: Box<dyn IdGenerator>,
        address: Box<dyn AddressResolver>,
    ) -> Self {
        Self { registry, id_gen, address }
    }

    /// Creates a live context talking to the Consul agent at `base_url`.
    #[must_use]
    pub fn live(base_url: &str) -> Self {
        Self::new(
            Box::new(ConsulClient::new(base_url)),
            Box::new(uuid_suffix),
            Box::new(HostnameAddressResolver),
        )
    }
}
