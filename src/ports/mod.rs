//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the registration logic and an
//! external system (the Consul agent, ID generation, the host network
//! configuration). Implementations live in `src/adapters/`.

pub mod address;
pub mod id_gen;
pub mod registry;

pub use address::AddressResolver;
pub use id_gen::IdGenerator;
pub use registry::{RegistrationReceipt, RegistryFuture, ServiceInstance, ServiceRegistry};
