//! Live adapter for the `ServiceRegistry` port using the Consul agent HTTP API.

use reqwest::{Client, Response, Url};
use serde::Deserialize;

use crate::ports::registry::{
    RegistrationReceipt, RegistryFuture, ServiceInstance, ServiceRegistry,
};
use crate::registration::Registration;
use crate::{Error, Result};

/// Agent endpoint that registers a service on the local node.
pub const REGISTER_PATH: [&str; 4] = ["v1", "agent", "service", "register"];
/// Catalog endpoint listing the instances of a service, cluster-wide.
/// The service name is appended as one more segment.
pub const CATALOG_SERVICE_PATH: [&str; 3] = ["v1", "catalog", "service"];

/// Live registry client that calls a Consul agent.
pub struct ConsulClient {
    client: Client,
    base_url: String,
}

impl ConsulClient {
    /// Creates a client for the agent at `base_url` (e.g. `http://consul:8500`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { client: Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `segments` onto the base URL, percent-encoding each one.
    fn endpoint<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Result<Url> {
        let invalid = |reason: String| Error::InvalidUrl { url: self.base_url.clone(), reason };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base URL".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// One entry of `GET /v1/catalog/service/<name>`.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CatalogEntry {
    /// Node address, used when the service did not advertise its own.
    address: String,
    #[serde(rename = "ServiceID")]
    service_id: String,
    #[serde(default)]
    service_address: String,
    service_port: u16,
}

impl From<CatalogEntry> for ServiceInstance {
    fn from(entry: CatalogEntry) -> Self {
        let address =
            if entry.service_address.is_empty() { entry.address } else { entry.service_address };
        Self { id: entry.service_id, address, port: entry.service_port }
    }
}

/// Reads the body and turns a non-2xx status into [`Error::Status`].
async fn checked_body(url: Url, response: Response) -> Result<(u16, String)> {
    let status = response.status();
    let body = response.text().await?;
    tracing::debug!(%url, status = status.as_u16(), "consul responded");

    if !status.is_success() {
        return Err(Error::Status { url: url.into(), status: status.as_u16(), body });
    }
    Ok((status.as_u16(), body))
}

impl ServiceRegistry for ConsulClient {
    fn register<'a>(
        &'a self,
        registration: &'a Registration,
    ) -> RegistryFuture<'a, RegistrationReceipt> {
        Box::pin(async move {
            let url = self.endpoint(REGISTER_PATH)?;
            let response = self.client.put(url.clone()).json(registration).send().await?;
            let (status, body) = checked_body(url, response).await?;

            Ok(RegistrationReceipt {
                id: registration.id.clone(),
                port: registration.port,
                status,
                body,
            })
        })
    }

    fn instances<'a>(&'a self, name: &'a str) -> RegistryFuture<'a, Vec<ServiceInstance>> {
        Box::pin(async move {
            let url = self.endpoint(CATALOG_SERVICE_PATH.into_iter().chain([name]))?;
            let response = self.client.get(url.clone()).send().await?;
            let (_, body) = checked_body(url, response).await?;

            let entries: Vec<CatalogEntry> = serde_json::from_str(&body)?;
            Ok(entries.into_iter().map(ServiceInstance::from).collect())
        })
    }
}
