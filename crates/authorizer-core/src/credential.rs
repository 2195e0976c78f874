//! Credential extraction from inbound requests.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use thiserror::Error;

/// Principal recorded for requests that authenticate with a raw API-key
/// header. The gateway validates the key itself before asking for a
/// decision, so no real identity is known here; this is a placeholder name,
/// not an identity with semantics.
pub const API_KEY_PRINCIPAL: &str = "token";

/// Header carrying a scheme-prefixed basic credential.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Default header carrying a raw gateway API key.
pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// Error type for credential parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("credential is not valid base64-encoded UTF-8")]
    Undecodable,

    #[error("credential has no identity:secret separator")]
    MissingSeparator,
}

/// An `(identity, secret)` pair extracted from one request.
///
/// Lives only for the duration of a single decision; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Claimed caller name.
    pub identity: String,
    /// Value that must match the key store record for `identity`.
    pub secret: String,
}

impl Credential {
    /// Parse a basic credential of the form `[scheme ]base64(identity:secret)`.
    ///
    /// The scheme prefix (e.g. `Basic `) is stripped by taking the substring
    /// after the last space, so a bare base64 value also parses. The decoded
    /// value is split on the first colon; secrets may therefore contain
    /// colons, identities may not.
    pub fn from_basic_token(token: &str) -> Result<Self, CredentialError> {
        let encoded = token.rsplit(' ').next().unwrap_or(token);
        let decoded = BASE64
            .decode(encoded)
            .map_err(|_| CredentialError::Undecodable)?;
        let decoded = String::from_utf8(decoded).map_err(|_| CredentialError::Undecodable)?;
        let (identity, secret) = decoded
            .split_once(':')
            .ok_or(CredentialError::MissingSeparator)?;

        Ok(Self {
            identity: identity.to_string(),
            secret: secret.to_string(),
        })
    }

    /// Synthetic credential for the API-key passthrough branch.
    pub fn from_api_key(value: impl Into<String>) -> Self {
        Self {
            identity: API_KEY_PRINCIPAL.to_string(),
            secret: value.into(),
        }
    }
}
