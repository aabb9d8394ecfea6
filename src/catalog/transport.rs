//! HTTP transport shared by all provider clients
//!
//! One `reqwest::Client` is built per catalog client and reused for every
//! provider. Status handling follows the same rules everywhere:
//! 429 is [`CatalogError::RateLimited`], any other non-2xx is
//! [`CatalogError::Network`] carrying the status and the start of the body.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::domain::CatalogError;
use super::traits::Transport;

/// User agent string - MusicBrainz rejects anonymous clients
pub const USER_AGENT: &str = concat!(
    "CrateMinder/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/crate-minder)"
);

/// Max characters of an error body kept in the error message
const ERROR_BODY_PREVIEW: usize = 200;

/// reqwest-backed transport
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the given user agent and request timeout
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &reqwest::Url) -> Result<String, CatalogError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Rate limited by {}", url.host_str().unwrap_or("provider"));
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("HTTP {} from {}", status, url);
            return Err(CatalogError::Network(format!(
                "HTTP {}: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown"),
                body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))
    }
}

/// Build a request URL from a base, a path, and query parameters.
///
/// Fails with [`CatalogError::InvalidRequest`] when the result is not a
/// valid absolute URL.
pub fn build_url(
    base_url: &str,
    path: &str,
    params: &[(&str, &str)],
) -> Result<reqwest::Url, CatalogError> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    let parsed = if params.is_empty() {
        reqwest::Url::parse(&raw)
    } else {
        reqwest::Url::parse_with_params(&raw, params)
    };

    parsed.map_err(|e| CatalogError::InvalidRequest(format!("{}: {}", raw, e)))
}

/// Decode a JSON body into a DTO
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Reject blank textual parameters before any request is made
pub fn require(name: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidRequest(format!("{} must not be empty", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_params() {
        let url = build_url(
            "https://itunes.apple.com/",
            "/search",
            &[("term", "simon & garfunkel"), ("country", "US")],
        )
        .unwrap();

        assert_eq!(url.path(), "/search");
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("term".to_string(), "simon & garfunkel".to_string()));
        assert_eq!(pairs[1], ("country".to_string(), "US".to_string()));
    }

    #[test]
    fn test_build_url_without_params() {
        let url = build_url("https://rss.example.com", "api/v2/us/albums.json", &[]).unwrap();
        assert_eq!(url.as_str(), "https://rss.example.com/api/v2/us/albums.json");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_build_url_rejects_relative_base() {
        let err = build_url("not a url", "search", &[]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRequest(_)));
    }

    #[test]
    fn test_decode_reports_parse_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Shape {
            #[allow(dead_code)]
            count: u32,
        }

        let err = decode::<Shape>("{\"count\": \"many\"}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("term", "adele").is_ok());
        assert!(matches!(
            require("term", "   "),
            Err(CatalogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("CrateMinder/"));
    }
}
