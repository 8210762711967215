//! Blocking client for the Helix users endpoint.

use std::time::Duration;

use log::debug;
use serde::Deserialize;

use streamscope_core::error::{Result, StreamscopeError};
use streamscope_core::metadata::{ChannelMetadata, MetadataLookup};

/// Default Helix API root.
pub const DEFAULT_BASE_URL: &str = "https://api.twitch.tv/helix";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);

/// Credentials and endpoint for the Helix users API.
#[derive(Debug, Clone)]
pub struct HelixConfig {
    /// Application client id.
    pub client_id: String,
    /// OAuth bearer token.
    pub access_token: String,
    /// API root, overridable for testing.
    pub base_url: String,
}

impl HelixConfig {
    /// Creates a config against the default API root.
    pub fn new(client_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads credentials from `STREAMSCOPE_CLIENT_ID` and
    /// `STREAMSCOPE_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("STREAMSCOPE_CLIENT_ID")
            .map_err(|_| StreamscopeError::InvalidConfig("STREAMSCOPE_CLIENT_ID is not set".into()))?;
        let access_token = std::env::var("STREAMSCOPE_ACCESS_TOKEN").map_err(|_| {
            StreamscopeError::InvalidConfig("STREAMSCOPE_ACCESS_TOKEN is not set".into())
        })?;
        Ok(Self::new(client_id, access_token))
    }
}

/// Blocking metadata client.
///
/// One lookup per added channel; no retry, no caching. A hung request is
/// bounded only by the client timeout.
pub struct HelixClient {
    config: HelixConfig,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct UsersResponse {
    data: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    display_name: String,
    profile_image_url: String,
    // Helix sends an empty string when no offline banner is set.
    #[serde(default)]
    offline_image_url: String,
}

impl HelixClient {
    /// Creates a client from the given config.
    pub fn new(config: HelixConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| StreamscopeError::MetadataTransport(e.to_string()))?;
        Ok(Self { config, http })
    }
}

impl MetadataLookup for HelixClient {
    fn lookup(&self, name: &str) -> Result<Option<ChannelMetadata>> {
        let url = format!("{}/users", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("login", name)])
            .bearer_auth(&self.config.access_token)
            .header("Client-Id", &self.config.client_id)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| StreamscopeError::MetadataTransport(e.to_string()))?;

        let body: UsersResponse = response
            .json()
            .map_err(|e| StreamscopeError::MetadataTransport(e.to_string()))?;

        let Some(user) = body.data.into_iter().next() else {
            debug!("helix lookup for '{name}' returned no match");
            return Ok(None);
        };

        Ok(Some(ChannelMetadata {
            display_name: user.display_name,
            avatar_image_url: user.profile_image_url,
            offline_image_url: (!user.offline_image_url.is_empty())
                .then_some(user.offline_image_url),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_helix_root() {
        let config = HelixConfig::new("id", "token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_users_response_shape() {
        let json = r#"{"data":[{"display_name":"Somebody",
            "profile_image_url":"https://img.example/a.png",
            "offline_image_url":""}]}"#;
        let body: UsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].display_name, "Somebody");
        assert!(body.data[0].offline_image_url.is_empty());
    }

    #[test]
    fn test_empty_data_is_not_found() {
        let json = r#"{"data":[]}"#;
        let body: UsersResponse = serde_json::from_str(json).unwrap();
        assert!(body.data.is_empty());
    }
}
