pub mod client;
pub mod models;

pub use client::{ApiError, ListingClient};
pub use models::{Property, PropertyAmenity, PropertyDocument, PropertyImage};

use crate::search::query::{SearchParams, SearchQuery};

/// Backend operations the UI depends on (allows mocking for tests)
#[async_trait::async_trait]
pub trait ListingBackend: Send + Sync {
    /// `GET /api/properties/search/` with category/location/property_type
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Property>, ApiError>;

    /// `GET /api/properties/` with keyword/location/propertyType
    async fn list_properties(&self, params: &SearchParams) -> Result<Vec<Property>, ApiError>;

    /// `POST /api/verify-email/` with `{"token": ...}`
    async fn verify_email(&self, token: &str) -> Result<(), ApiError>;
}
