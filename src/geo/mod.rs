//! Geo directory abstraction
//!
//! Defines the GeoDirectory trait and its REST implementation. The trait
//! covers the three external lookups the selection chain depends on:
//! - full calling-code / country directory (list-all)
//! - states for a country
//! - cities for a (country, state) pair
//!
//! Lookups carry no retries and no cache; a failed lookup is reported as
//! `GeoDirectoryError` and callers degrade to an empty option list.

use crate::models::CallingCodeOption;
use async_trait::async_trait;

/// Error type for geo directory lookups
#[derive(Debug, thiserror::Error)]
pub enum GeoDirectoryError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("Directory service error: {0}")]
    ServiceError(String),
}

/// Trait for geo directory services
///
/// Abstracts the external read-only reference-data services so the
/// selection layer can run against the REST services or a test double.
#[async_trait(?Send)]
pub trait GeoDirectory: Send + Sync {
    /// Fetch the full calling-code directory
    async fn calling_codes(&self) -> Result<Vec<CallingCodeOption>, GeoDirectoryError>;

    /// Fetch the subdivisions of a country; empty when the directory does
    /// not know the country or it has none
    async fn states(&self, country: &str) -> Result<Vec<String>, GeoDirectoryError>;

    /// Fetch the city names of a (country, state) pair; empty on no match
    async fn cities(
        &self,
        country: &str,
        state: &str,
    ) -> Result<Vec<String>, GeoDirectoryError>;
}

#[cfg(feature = "geo-rest")]
pub mod rest;
