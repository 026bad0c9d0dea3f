//! In-process adapters with deterministic behavior.
//!
//! These stand in for the Consul agent and the host environment so the
//! registration loop can be exercised without a network.

pub mod address;
pub mod id_gen;
pub mod registry;

pub use address::FixedAddressResolver;
pub use id_gen::SequentialIdGenerator;
pub use registry::MemoryRegistry;
