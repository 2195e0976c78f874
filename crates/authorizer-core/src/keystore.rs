//! Key store lookup: the trait seam plus an in-memory double and an HTTP
//! client implementation.
//!
//! The key-management service is external; this module only knows how to ask
//! it one question: "which key records carry exactly this name?".

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default timeout for key store requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(180);

/// A single API key record as returned by the key store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyRecord {
    /// Key name (the identity it belongs to).
    pub name: String,
    /// Secret value; present only when the lookup requested values.
    #[serde(default)]
    pub value: Option<String>,
}

/// Error type for key store lookups
#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("key store request failed: {0}")]
    Transport(String),

    #[error("key store returned HTTP {0}")]
    Status(u16),

    #[error("key store response could not be decoded: {0}")]
    Decode(String),
}

/// Lookup interface to the external key-management service.
///
/// Implementations must return every record whose name exactly equals the
/// query; the caller decides what zero or multiple matches mean.
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Find records by exact name. `include_values` asks the store to attach
    /// secret values to the returned records.
    async fn find_keys(
        &self,
        name: &str,
        include_values: bool,
    ) -> Result<Vec<KeyRecord>, KeyStoreError>;
}

/// Fixed in-memory key store for tests and local runs.
///
/// Duplicate names are allowed so ambiguous-identity behavior can be
/// exercised.
#[derive(Debug, Clone, Default)]
pub struct StaticKeyStore {
    records: Vec<KeyRecord>,
}

impl StaticKeyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key record, builder style.
    pub fn with_key(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.records.push(KeyRecord {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }
}

#[async_trait]
impl KeyStore for StaticKeyStore {
    async fn find_keys(
        &self,
        name: &str,
        include_values: bool,
    ) -> Result<Vec<KeyRecord>, KeyStoreError> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.name == name)
            .map(|record| KeyRecord {
                name: record.name.clone(),
                value: if include_values {
                    record.value.clone()
                } else {
                    None
                },
            })
            .collect())
    }
}

/// Response body of the key-management API's list endpoint.
#[derive(Debug, Deserialize)]
struct KeyListResponse {
    #[serde(default)]
    items: Vec<KeyRecord>,
}

/// HTTP client for the key-management API.
///
/// Queries `GET {base}/apikeys?nameQuery=<name>&includeValues=<bool>` and
/// expects an `{"items": [...]}` body. Authenticates with an optional
/// service token header.
#[derive(Debug, Clone)]
pub struct HttpKeyStore {
    client: reqwest::Client,
    base_url: String,
    service_token: Option<String>,
    timeout: Duration,
}

impl HttpKeyStore {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the service token sent as `X-Service-Token`.
    pub fn with_service_token(mut self, token: impl Into<String>) -> Self {
        self.service_token = Some(token.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl KeyStore for HttpKeyStore {
    async fn find_keys(
        &self,
        name: &str,
        include_values: bool,
    ) -> Result<Vec<KeyRecord>, KeyStoreError> {
        let url = format!("{}/apikeys", self.base_url);

        let mut req = self.client.get(&url).query(&[
            ("nameQuery", name),
            ("includeValues", if include_values { "true" } else { "false" }),
        ]);
        if let Some(token) = &self.service_token {
            req = req.header("X-Service-Token", token);
        }

        let resp = req
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| KeyStoreError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(KeyStoreError::Status(status.as_u16()));
        }

        let body: KeyListResponse = resp
            .json()
            .await
            .map_err(|e| KeyStoreError::Decode(e.to_string()))?;

        debug!(name, matches = body.items.len(), "key store lookup");
        Ok(body.items)
    }
}
