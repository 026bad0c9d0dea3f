//! Live adapters for real external interactions.

pub mod address;
pub mod consul;
pub mod id_gen;

pub use address::HostnameAddressResolver;
pub use consul::ConsulClient;
pub use id_gen::uuid_suffix;
