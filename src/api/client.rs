use super::models::Property;
use super::ListingBackend;
use crate::config::Config;
use crate::search::query::{SearchParams, SearchQuery};
use reqwest::{Client, Error as ReqwestError, Request, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Backend returned {status}{}", format_detail(.detail))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

fn format_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Human-readable detail supplied by the backend, if any.
    /// A blank `detail` counts as none.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => {
                detail.as_deref().filter(|d| !d.trim().is_empty())
            }
            _ => None,
        }
    }
}

/// Error body shape used by the backend (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client for the listing backend
#[derive(Clone)]
pub struct ListingClient {
    client: Client,
    base_url: String,
}

impl ListingClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("realty/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-2xx response into [`ApiError::Status`], keeping `detail`
    async fn reject(response: Response) -> ApiError {
        let status = response.status();
        let detail = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail),
            Err(e) => {
                debug!("Could not read error body: {}", e);
                None
            }
        };
        warn!("✗ Backend error {}: {:?}", status, detail);
        ApiError::Status { status, detail }
    }

    fn search_request(&self, query: &SearchQuery) -> Result<Request, ApiError> {
        let url = format!("{}/api/properties/search/", self.base_url);
        Ok(self.client.get(url).query(&query.pairs()).build()?)
    }

    fn listing_request(&self, params: &SearchParams) -> Result<Request, ApiError> {
        let url = format!("{}/api/properties/", self.base_url);
        Ok(self.client.get(url).query(&params.pairs()).build()?)
    }

    async fn read_properties(response: Response) -> Result<Vec<Property>, ApiError> {
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let body = response.bytes().await?;
        let properties: Vec<Property> = serde_json::from_slice(&body)?;
        info!("✓ Received {} propert(ies)", properties.len());
        Ok(properties)
    }
}

#[async_trait::async_trait]
impl ListingBackend for ListingClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Property>, ApiError> {
        let request = self.search_request(query)?;
        info!("📡 GET {}", request.url());

        let response = self.client.execute(request).await?;
        Self::read_properties(response).await
    }

    async fn list_properties(&self, params: &SearchParams) -> Result<Vec<Property>, ApiError> {
        let request = self.listing_request(params)?;
        info!("📡 GET {}", request.url());

        let response = self.client.execute(request).await?;
        Self::read_properties(response).await
    }

    async fn verify_email(&self, token: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/verify-email/", self.base_url);
        info!("📡 POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "token": token }))
            .send()
            .await?;

        if response.status().is_success() {
            info!("✓ Email verified");
            Ok(())
        } else {
            Err(Self::reject(response).await)
        }
    }
}
