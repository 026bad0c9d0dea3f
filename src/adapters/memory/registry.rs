//! In-memory adapter for the `ServiceRegistry` port.

use std::sync::{Arc, Mutex};

use crate::ports::registry::{
    RegistrationReceipt, RegistryFuture, ServiceInstance, ServiceRegistry,
};
use crate::registration::Registration;
use crate::Error;

#[derive(Default)]
struct State {
    registrations: Vec<Registration>,
    attempts: usize,
    fail_after: Option<usize>,
}

/// Records registrations in memory and serves them back as catalog entries.
///
/// Clones share the same state, so a test can keep one handle and pass
/// another into a [`crate::context::ServiceContext`].
#[derive(Clone, Default)]
pub struct MemoryRegistry {
    state: Arc<Mutex<State>>,
}

impl MemoryRegistry {
    /// Creates a registry that accepts every registration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that accepts `n` registrations, then answers 500.
    #[must_use]
    pub fn failing_after(n: usize) -> Self {
        let registry = Self::new();
        registry.lock().fail_after = Some(n);
        registry
    }

    /// Registrations accepted so far, in call order.
    #[must_use]
    pub fn registrations(&self) -> Vec<Registration> {
        self.lock().registrations.clone()
    }

    /// Number of `register` calls, including rejected ones.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.lock().attempts
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("registry lock poisoned")
    }
}

impl ServiceRegistry for MemoryRegistry {
    fn register<'a>(
        &'a self,
        registration: &'a Registration,
    ) -> RegistryFuture<'a, RegistrationReceipt> {
        Box::pin(async move {
            let mut state = self.lock();
            state.attempts += 1;
            if state.fail_after.is_some_and(|n| state.registrations.len() >= n) {
                return Err(Error::Status {
                    url: "memory://v1/agent/service/register".into(),
                    status: 500,
                    body: "registration rejected".into(),
                });
            }
            state.registrations.push(registration.clone());
            Ok(RegistrationReceipt {
                id: registration.id.clone(),
                port: registration.port,
                status: 200,
                body: String::new(),
            })
        })
    }

    fn instances<'a>(&'a self, name: &'a str) -> RegistryFuture<'a, Vec<ServiceInstance>> {
        Box::pin(async move {
            Ok(self
                .lock()
                .registrations
                .iter()
                .filter(|r| r.name == name)
                .map(|r| ServiceInstance {
                    id: r.id.clone(),
                    address: r.address.clone(),
                    port: r.port,
                })
                .collect())
        })
    }
}
