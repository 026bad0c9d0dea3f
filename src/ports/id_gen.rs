//! Source of the unique suffix in each service instance ID.

/// Produces a fresh, never-repeated suffix per call.
pub trait IdGenerator: Send + Sync {
    /// Returns the next suffix.
    fn generate_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate_id(&self) -> String {
        self()
    }
}
