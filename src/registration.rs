//! Registration payloads and the per-port registration loop.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::context::ServiceContext;
use crate::ports::RegistrationReceipt;
use crate::{Error, Result};

/// Metadata key attached to every registered instance.
pub const META_KEY: &str = "raft-infra-test-node";
/// Value stored under [`META_KEY`].
pub const META_VALUE: &str = "true";

/// JSON body accepted by `PUT /v1/agent/service/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Registration {
    /// Logical service name shared by all instances.
    pub name: String,
    /// Unique instance ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Port the instance listens on.
    pub port: u16,
    /// Address the instance is reachable at.
    pub address: String,
    /// Static metadata tags.
    pub meta: BTreeMap<String, String>,
}

impl Registration {
    /// Builds a payload carrying the static metadata tag.
    #[must_use]
    pub fn new(name: &str, id: String, port: u16, address: &str) -> Self {
        let meta = BTreeMap::from([(META_KEY.to_string(), META_VALUE.to_string())]);
        Self { name: name.to_string(), id, port, address: address.to_string(), meta }
    }
}

/// Formats the instance ID for a service: `<name>-<unique>`.
#[must_use]
pub fn service_id(name: &str, unique: &str) -> String {
    format!("{name}-{unique}")
}

/// What to register: one service name advertised on one or more ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Service name.
    pub name: String,
    /// Ports to register, in order.
    pub ports: Vec<u16>,
    /// Address to advertise; resolved from the local machine when `None`.
    pub address: Option<String>,
}

/// Registers every port in `request`, one after another.
///
/// Each payload is printed to `out` before it is sent and each receipt after
/// it comes back. The first failure stops the loop: earlier ports stay
/// registered and later ports are never attempted.
///
/// # Errors
///
/// Returns the first address-resolution, HTTP, or output error encountered.
pub async fn register_all<W: Write>(
    ctx: &ServiceContext,
    request: &RegisterRequest,
    out: &mut W,
) -> Result<Vec<RegistrationReceipt>> {
    let address = match &request.address {
        Some(address) => address.clone(),
        None => {
            let address = ctx.address.local_address()?;
            tracing::debug!(%address, "resolved local address");
            address
        }
    };

    let mut receipts = Vec::with_capacity(request.ports.len());
    for &port in &request.ports {
        let id = service_id(&request.name, &ctx.id_gen.generate_id());
        let registration = Registration::new(&request.name, id, port, &address);

        let payload = serde_json::to_string_pretty(&registration)?;
        writeln!(out, "{payload}").map_err(Error::Output)?;

        tracing::info!(id = %registration.id, port, "registering service instance");
        let receipt = ctx.registry.register(&registration).await.inspect_err(|err| {
            tracing::debug!(id = %registration.id, port, %err, "registration failed");
        })?;

        writeln!(out, "{receipt}").map_err(Error::Output)?;
        receipts.push(receipt);
    }

    Ok(receipts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FixedAddressResolver, MemoryRegistry, SequentialIdGenerator};
    use serde_json::json;

    fn context(registry: MemoryRegistry) -> (ServiceContext, MemoryRegistry) {
        let ctx = ServiceContext::new(
            Box::new(registry.clone()),
            Box::new(SequentialIdGenerator::new("uuid")),
            Box::new(FixedAddressResolver::new("10.0.0.7")),
        );
        (ctx, registry)
    }

    fn request(ports: &[u16], address: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: "raft".into(),
            ports: ports.to_vec(),
            address: address.map(str::to_string),
        }
    }

    #[test]
    fn payload_uses_consul_field_names() {
        let registration = Registration::new("raft", "raft-abc".into(), 9001, "10.0.0.7");
        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            value,
            json!({
                "Name": "raft",
                "ID": "raft-abc",
                "Port": 9001,
                "Address": "10.0.0.7",
                "Meta": { "raft-infra-test-node": "true" }
            })
        );
    }

    #[test]
    fn service_id_prefixes_name() {
        assert_eq!(service_id("raft", "1234"), "raft-1234");
    }

    #[tokio::test]
    async fn registers_each_port_in_order() {
        let (ctx, registry) = context(MemoryRegistry::new());
        let mut out = Vec::new();

        let receipts =
            register_all(&ctx, &request(&[9001, 9002, 9003], Some("192.168.1.5")), &mut out)
                .await
                .unwrap();

        assert_eq!(receipts.len(), 3);
        let sent = registry.registrations();
        let ports: Vec<u16> = sent.iter().map(|r| r.port).collect();
        assert_eq!(ports, vec![9001, 9002, 9003]);
        let ids: Vec<&str> = sent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["raft-uuid-0", "raft-uuid-1", "raft-uuid-2"]);
        assert!(sent.iter().all(|r| r.address == "192.168.1.5" && r.name == "raft"));
    }

    #[tokio::test]
    async fn omitted_address_uses_resolved_local_address() {
        let (ctx, registry) = context(MemoryRegistry::new());
        let mut out = Vec::new();

        register_all(&ctx, &request(&[9001], None), &mut out).await.unwrap();

        assert_eq!(registry.registrations()[0].address, "10.0.0.7");
    }

    #[tokio::test]
    async fn failure_stops_remaining_ports() {
        let (ctx, registry) = context(MemoryRegistry::failing_after(1));
        let mut out = Vec::new();

        let result = register_all(&ctx, &request(&[9001, 9002, 9003], None), &mut out).await;

        assert!(matches!(result, Err(Error::Status { status: 500, .. })));
        // The failing call is attempted; the one after it is not.
        assert_eq!(registry.attempts(), 2);
        assert_eq!(registry.registrations().len(), 1);
    }

    #[tokio::test]
    async fn prints_payload_and_receipt() {
        let (ctx, _registry) = context(MemoryRegistry::new());
        let mut out = Vec::new();

        register_all(&ctx, &request(&[9001], None), &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("\"ID\": \"raft-uuid-0\""));
        assert!(printed.contains("raft-uuid-0 (port 9001): HTTP 200"));
    }
}
