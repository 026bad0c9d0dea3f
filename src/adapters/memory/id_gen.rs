//! Sequential adapter for the `IdGenerator` port.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::IdGenerator;

/// Produces `<prefix>-0`, `<prefix>-1`, ... in call order.
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at zero.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string(), next: AtomicUsize::new(0) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}
