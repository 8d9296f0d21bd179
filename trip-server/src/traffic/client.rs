//! Traffic feed HTTP client.

use super::error::TrafficError;
use super::types::TrafficFeed;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the traffic feed client.
#[derive(Debug, Clone)]
pub struct TrafficFeedConfig {
    /// Full URL of the feed endpoint
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TrafficFeedConfig {
    /// Create a new config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the traffic feed.
///
/// The feed returns the full current set of alerts and jams in one JSON
/// document; there is no pagination or delta protocol.
#[derive(Debug, Clone)]
pub struct TrafficFeedClient {
    http: reqwest::Client,
    url: String,
}

impl TrafficFeedClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TrafficFeedConfig) -> Result<Self, TrafficError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch the current feed document.
    pub async fn fetch(&self) -> Result<TrafficFeed, TrafficError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TrafficError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TrafficError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TrafficFeedConfig::new("http://localhost:9000/feed");
        assert_eq!(config.url, "http://localhost:9000/feed");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = TrafficFeedConfig::new("http://localhost:9000/feed").with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let config = TrafficFeedConfig::new("http://localhost:9000/feed");
        assert!(TrafficFeedClient::new(config).is_ok());
    }
}
