//! Google Translate "gtx" provider
//!
//! Talks to the unauthenticated `translate_a/single` endpoint that browser
//! extensions use. No API key is needed; the endpoint answers with a nested
//! JSON array (see [`crate::response`]) or, when it rejects the query, with an
//! HTML error page.
//!
//! # Example
//!
//! ```ignore
//! use wordgate::{GoogleTranslateProvider, WordTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::with_defaults()?;
//!     let result = provider.translate("ev").await?;
//!     println!("{}", result); // "house"
//!     Ok(())
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::response::extract_translation;
use crate::translator::{SOURCE_LANGUAGE, TARGET_LANGUAGE, WordTranslator};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

/// Public gtx endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Upper bound on a single outbound call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Marker the endpoint puts in its HTML page when it rejects a query
const BAD_REQUEST_MARKER: &str = "<title>Error 400 (Bad Request)";

/// Google Translate gtx provider
///
/// Holds one pooled HTTP client; cloning is cheap and clones share the pool.
#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Endpoint the query string is appended to
    base_url: Url,
}

impl GoogleTranslateProvider {
    /// Create a provider for `base_url` with a per-request `timeout`
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(TranslateError::Config)` - If the URL does not parse, the timeout
    ///   is zero, or the HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> TranslateResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            TranslateError::Config(format!("Invalid endpoint URL '{}': {}", base_url, e))
        })?;

        if timeout.is_zero() {
            return Err(TranslateError::Config(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a provider for the public endpoint with the default timeout
    pub fn with_defaults() -> TranslateResult<Self> {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the query URL for `word`
    ///
    /// The word is percent-encoded, so reserved characters such as `&`, `#`
    /// or spaces reach the endpoint as part of the word.
    pub fn request_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", SOURCE_LANGUAGE)
            .append_pair("tl", TARGET_LANGUAGE)
            .append_pair("dt", "t")
            .append_pair("q", word);
        url
    }

    /// Classify a response body
    ///
    /// The HTML error page check runs first and wins regardless of what else
    /// the body contains.
    pub fn parse_body(body: &str) -> TranslateResult<String> {
        if body.contains(BAD_REQUEST_MARKER) {
            return Err(TranslateError::InvalidRequest);
        }
        extract_translation(body)
    }
}

#[async_trait]
impl WordTranslator for GoogleTranslateProvider {
    async fn translate(&self, word: &str) -> TranslateResult<String> {
        let url = self.request_url(word);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request to translation endpoint failed: {}", e);
            TranslateError::from(e)
        })?;

        let status = response.status();
        // Consumes the response, releasing the connection on every path
        let body = response.text().await?;
        debug!("Translation endpoint answered {} ({} bytes)", status, body.len());

        Self::parse_body(&body)
    }

    fn provider_name(&self) -> &str {
        "Google Translate (gtx)"
    }
}
