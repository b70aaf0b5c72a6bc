//! HTTP source backed by the CRM REST API.
//!
//! Every resource is a `GET <base_url>/<resource>` returning a JSON array.
//! Successful responses are stored in the [`SnapshotCache`]; in offline mode
//! the snapshot is served instead and the network is never touched.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::{DataSource, RecordOrigin};
use crate::cache::SnapshotCache;
use crate::config;
use crate::error::{CrmError, Result};
use crate::models::{ContractRecord, Customer, Singer};

/// Blocking client for the CRM API.
pub struct RemoteSource {
    base_url: String,
    client: Client,
    cache: Option<SnapshotCache>,
    offline: bool,
}

impl RemoteSource {
    /// Create a source for the API rooted at `base_url`.
    ///
    /// `base_url` must be an absolute `http` or `https` URL. A trailing slash
    /// is ignored.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| CrmError::InvalidArgument(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CrmError::InvalidArgument(format!(
                "Base URL must be http or https, got '{}'",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            base_url: trimmed.to_string(),
            client,
            cache: None,
            offline: false,
        })
    }

    /// Store successful responses in `cache` and serve them when offline.
    pub fn with_cache(mut self, cache: SnapshotCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, requests are answered from the snapshot cache only.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn cache(&self) -> Option<&SnapshotCache> {
        self.cache.as_ref()
    }

    /// Full URL of a resource endpoint.
    pub fn url_for(&self, resource: &str) -> Result<String> {
        let paths = config::resource_paths();
        let path = paths
            .get(resource)
            .ok_or_else(|| CrmError::NotFound(format!("Unknown resource: {}", resource)))?;
        Ok(format!("{}/{}", self.base_url, path))
    }

    /// Fetch the `customers` list.
    pub fn customers(&self) -> Result<Vec<Customer>> {
        self.fetch_resource("customers")
    }

    /// Fetch the `singers` list.
    pub fn singers(&self) -> Result<Vec<Singer>> {
        self.fetch_resource("singers")
    }

    /// Fetch and decode a resource, or read its snapshot when offline.
    pub fn fetch_resource<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let body = if self.offline {
            self.load_snapshot(resource)?
        } else {
            self.download(resource)?
        };

        let items: Vec<T> = decode_array(resource, &body)?;

        if !self.offline {
            if let Some(cache) = &self.cache {
                if let Err(e) = cache.store(resource, &body) {
                    tracing::warn!(resource, error = %e, "failed to store snapshot");
                }
            }
        }

        Ok(items)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn download(&self, resource: &str) -> Result<serde_json::Value> {
        let url = self.url_for(resource)?;
        tracing::debug!(%url, "fetching");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CrmError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json()?)
    }

    fn load_snapshot(&self, resource: &str) -> Result<serde_json::Value> {
        let cache = self.cache.as_ref().ok_or_else(|| {
            CrmError::NotFound(format!(
                "'{}' requested offline but no snapshot cache is configured",
                resource
            ))
        })?;
        cache.load(resource)?.ok_or_else(|| {
            CrmError::NotFound(format!(
                "No snapshot for '{}' and offline mode is enabled",
                resource
            ))
        })
    }
}

impl DataSource for RemoteSource {
    fn origin(&self) -> RecordOrigin {
        if self.offline {
            RecordOrigin::Snapshot
        } else {
            RecordOrigin::Remote
        }
    }

    fn contracts(&self) -> Result<Vec<ContractRecord>> {
        self.fetch_resource("contracts")
    }
}

/// Decode a response body that must be a JSON array.
///
/// Accepts either a bare array or an object wrapping it under `data`.
fn decode_array<T: DeserializeOwned>(resource: &str, body: &serde_json::Value) -> Result<Vec<T>> {
    let array = match body {
        serde_json::Value::Array(_) => body,
        serde_json::Value::Object(map) => match map.get("data") {
            Some(data @ serde_json::Value::Array(_)) => data,
            _ => {
                return Err(CrmError::InvalidArgument(format!(
                    "Response for '{}' is an object without a 'data' array",
                    resource
                )))
            }
        },
        _ => {
            return Err(CrmError::InvalidArgument(format!(
                "Response for '{}' is not a JSON array",
                resource
            )))
        }
    };
    Ok(Vec::<T>::deserialize(array)?)
}
