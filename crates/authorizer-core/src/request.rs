//! Inbound request descriptor passed by the invocation platform.

use serde::Deserialize;
use std::collections::HashMap;

/// One authorization request, as delivered by the gateway.
///
/// Two invocation shapes exist: the legacy one carries the credential in
/// `authorizationToken`, the general one carries the request headers. Exactly
/// one of the two is expected to be populated; `method_arn` identifies the
/// gateway method being invoked (`<prefix>/<stage>/<method>/<path>`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerRequest {
    /// Raw credential from the legacy token-based invocation shape.
    #[serde(default)]
    pub authorization_token: Option<String>,

    /// Request headers from the header-driven invocation shape.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,

    /// Gateway method ARN for the invoked call.
    pub method_arn: String,
}

impl AuthorizerRequest {
    /// Build a legacy token-shaped request.
    pub fn from_token(token: impl Into<String>, method_arn: impl Into<String>) -> Self {
        Self {
            authorization_token: Some(token.into()),
            headers: None,
            method_arn: method_arn.into(),
        }
    }

    /// Build a header-shaped request.
    pub fn from_headers<K, V>(
        headers: impl IntoIterator<Item = (K, V)>,
        method_arn: impl Into<String>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            authorization_token: None,
            headers: Some(
                headers
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            method_arn: method_arn.into(),
        }
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref()?.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v.as_str())
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_header_event() {
        let event = serde_json::json!({
            "headers": {"Authorization": "Basic abc"},
            "methodArn": "arn:aws:execute-api:eu-west-1:123:api/dev/GET/items"
        });

        let request: AuthorizerRequest = serde_json::from_value(event).unwrap();

        assert!(request.authorization_token.is_none());
        assert_eq!(request.header("authorization"), Some("Basic abc"));
        assert_eq!(
            request.method_arn,
            "arn:aws:execute-api:eu-west-1:123:api/dev/GET/items"
        );
    }

    #[test]
    fn test_deserialize_token_event() {
        let event = serde_json::json!({
            "authorizationToken": "Basic abc",
            "methodArn": "arn/dev/GET/items"
        });

        let request: AuthorizerRequest = serde_json::from_value(event).unwrap();

        assert_eq!(request.authorization_token.as_deref(), Some("Basic abc"));
        assert!(request.headers.is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request =
            AuthorizerRequest::from_headers([("X-Api-Key", "k-123")], "arn/dev/GET/items");

        assert_eq!(request.header("x-api-key"), Some("k-123"));
        assert_eq!(request.header("X-API-KEY"), Some("k-123"));
        assert_eq!(request.header("authorization"), None);
    }
}
