//! Address resolver port for discovering the address to advertise.

use crate::Result;

/// Determines the address of the machine this process runs on.
pub trait AddressResolver: Send + Sync {
    /// Returns the local address as it should appear in the `Address` field.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AddressResolution`] if no address can be found.
    fn local_address(&self) -> Result<String>;
}
