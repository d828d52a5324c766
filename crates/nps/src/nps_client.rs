use log::{debug, info, warn};
use reqwest::{Client, StatusCode};

use crate::campground::Campground;
use crate::decode::{decode_campgrounds, top_level_keys};
use crate::nps_error::NpsError;

/// Default NPS API root
pub const NPS_BASE_URL: &str = "https://developer.nps.gov/api/v1";

const BODY_PREVIEW_CHARS: usize = 500;

/// Client for the National Park Service campgrounds API
#[derive(Clone)]
pub struct NpsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NpsClient {
    /// Create a new NPS API client
    pub fn new(api_key: Option<String>) -> Result<Self, NpsError> {
        let client = Client::builder()
            .user_agent(concat!("campgrounds/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NpsError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: NPS_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Point the client at another API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Endpoint for the campgrounds listing, without the key
    pub fn campgrounds_url(&self) -> String {
        format!("{}/campgrounds", self.base_url)
    }

    /// Endpoint as it is safe to log
    pub fn redacted_url(&self) -> String {
        match self.api_key {
            Some(_) => format!("{}?api_key=***", self.campgrounds_url()),
            None => self.campgrounds_url(),
        }
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch and decode the campgrounds listing
    pub async fn fetch_campgrounds(&self) -> Result<Vec<Campground>, NpsError> {
        debug!("API URL: {}", self.redacted_url());

        let mut params = Vec::new();
        if let Some(ref api_key) = self.api_key {
            params.push(("api_key", api_key.as_str()));
        }

        let response = self
            .client
            .get(self.campgrounds_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| NpsError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("Failed to read error response body: {}", e);
                String::new()
            });
            warn!("API request failed with status {}", status);
            return Err(status_error(status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NpsError::Network(format!("Failed to read response body: {}", e)))?;

        info!("Successfully fetched campgrounds");
        debug!("Full JSON response: {}", preview(&body, BODY_PREVIEW_CHARS));
        debug!("JSON keys: {:?}", top_level_keys(&body));

        decode_campgrounds(&body)
    }
}

/// Map a non-success status to an error
fn status_error(status: StatusCode, body: String) -> NpsError {
    match status.as_u16() {
        429 => NpsError::RateLimited { body },
        code @ (401 | 403) => NpsError::AuthenticationFailed { status: code, body },
        code => NpsError::Http { status: code, body },
    }
}

/// First `max_chars` characters of `body`
fn preview(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
