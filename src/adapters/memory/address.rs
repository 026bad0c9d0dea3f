//! Fixed adapter for the `AddressResolver` port.

use crate::ports::AddressResolver;
use crate::Result;

/// Always resolves to the same address.
pub struct FixedAddressResolver {
    address: String,
}

impl FixedAddressResolver {
    /// Creates a resolver that returns `address`.
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self { address: address.to_string() }
    }
}

impl AddressResolver for FixedAddressResolver {
    fn local_address(&self) -> Result<String> {
        Ok(self.address.clone())
    }
}
