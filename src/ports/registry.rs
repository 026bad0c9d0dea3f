//! Service registry port for the Consul agent HTTP API.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::registration::Registration;
use crate::Result;

/// Boxed future type alias used by [`ServiceRegistry`] to keep the trait dyn-compatible.
pub type RegistryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// The agent's answer to one successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    /// Service instance ID that was registered.
    pub id: String,
    /// Port that was registered.
    pub port: u16,
    /// HTTP status code returned by the agent.
    pub status: u16,
    /// Raw response body (Consul normally sends an empty body).
    pub body: String,
}

impl fmt::Display for RegistrationReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (port {}): HTTP {}", self.id, self.port, self.status)?;
        if !self.body.is_empty() {
            write!(f, " {}", self.body)?;
        }
        Ok(())
    }
}

/// One registered instance of a service, as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    /// Service instance ID.
    pub id: String,
    /// Address the instance advertised.
    pub address: String,
    /// Port the instance advertised.
    pub port: u16,
}

/// Registers service instances with, and looks them up in, a service registry.
pub trait ServiceRegistry: Send + Sync {
    /// Registers a single service instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the registry answers
    /// with a non-success status.
    fn register<'a>(&'a self, registration: &'a Registration)
        -> RegistryFuture<'a, RegistrationReceipt>;

    /// Lists every registered instance of the named service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the registry answers
    /// with a non-success status, or the response cannot be decoded.
    fn instances<'a>(&'a self, name: &'a str) -> RegistryFuture<'a, Vec<ServiceInstance>>;
}
