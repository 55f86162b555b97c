//! Authenticated access to the Ringba REST API.
//!
//! One GET per resource kind:
//! `{api_url}/{account_id}/{path}?includeStats=true`, authenticated with a
//! `Token` authorization header. Responses are decoded as untyped JSON and
//! interpreted downstream.

use crate::config::ExportConfig;
use crate::models::ResourceKind;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The API answered with a non-success status.
    #[error("Failed to fetch {}: {status} {reason}", .kind.body_key())]
    Fetch {
        kind: ResourceKind,
        status: u16,
        reason: String,
    },
    /// Transport failure or an undecodable response body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// HTTP client bound to one account and API key.
pub struct RingbaClient {
    http: reqwest::Client,
    api_url: String,
    account_id: String,
    api_key: String,
}

impl RingbaClient {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            account_id: config.account_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch the raw collection body for one resource kind. With
    /// `include_stats` the API attaches per-entity usage counters under a
    /// top-level `stats` key.
    pub async fn fetch_collection(
        &self,
        kind: ResourceKind,
        include_stats: bool,
    ) -> Result<Value, ExportError> {
        let mut url = format!("{}/{}/{}", self.api_url, self.account_id, kind.path());
        if include_stats {
            url.push_str("?includeStats=true");
        }
        debug!(%url, "fetching resource collection");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::Fetch {
                kind,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_reports_body_key() {
        let err = ExportError::Fetch {
            kind: ResourceKind::Pingtrees,
            status: 401,
            reason: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch pingTrees: 401 Unauthorized");
    }
}
