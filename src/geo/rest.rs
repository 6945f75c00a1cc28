//! REST geo directory
//!
//! Implements GeoDirectory against the two public directory services the
//! contact form uses: restcountries.com for the calling-code directory and
//! countriesnow.space for states and cities.
//!
//! The locations service answers unknown countries/states with HTTP 404;
//! that is mapped to an empty option list, not an error.

use super::{GeoDirectory, GeoDirectoryError};
use crate::models::CallingCodeOption;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Base URLs of the directory services
#[derive(Debug, Clone)]
pub struct GeoDirectoryConfig {
    /// Calling-code / country directory (restcountries-compatible)
    pub countries_base_url: String,
    /// States and cities directory (countriesnow-compatible)
    pub locations_base_url: String,
}

impl Default for GeoDirectoryConfig {
    fn default() -> Self {
        Self {
            countries_base_url: "https://restcountries.com".to_string(),
            locations_base_url: "https://countriesnow.space".to_string(),
        }
    }
}

/// Geo directory client backed by the public REST services
pub struct RestGeoDirectory {
    config: GeoDirectoryConfig,
    client: reqwest::Client,
}

impl RestGeoDirectory {
    /// Create a client against the real public services
    pub fn new() -> Self {
        Self::with_config(GeoDirectoryConfig::default())
    }

    /// Create a client against custom base URLs
    ///
    /// # Example
    ///
    /// ```rust
    /// use contact_registry_sdk::geo::rest::{GeoDirectoryConfig, RestGeoDirectory};
    ///
    /// let directory = RestGeoDirectory::with_config(GeoDirectoryConfig {
    ///     countries_base_url: "http://localhost:8080".to_string(),
    ///     locations_base_url: "http://localhost:8081".to_string(),
    /// });
    /// ```
    pub fn with_config(config: GeoDirectoryConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl Default for RestGeoDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl GeoDirectory for RestGeoDirectory {
    async fn calling_codes(&self) -> Result<Vec<CallingCodeOption>, GeoDirectoryError> {
        let url = format!(
            "{}/v3.1/all?fields=name,cca2,idd",
            self.config.countries_base_url
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            GeoDirectoryError::Network(format!("Failed to fetch calling codes: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(GeoDirectoryError::ServiceError(format!(
                "Calling-code request failed: {}",
                response.status()
            )));
        }

        let countries: Vec<RestCountry> = response.json().await.map_err(|e| {
            GeoDirectoryError::UnexpectedResponse(format!("Failed to parse calling codes: {}", e))
        })?;

        Ok(countries
            .into_iter()
            .filter_map(RestCountry::into_option)
            .collect())
    }

    async fn states(&self, country: &str) -> Result<Vec<String>, GeoDirectoryError> {
        let url = format!(
            "{}/api/v0.1/countries/states",
            self.config.locations_base_url
        );

        let response = self
            .client
            .post(&url)
            .json(&StatesRequest { country })
            .send()
            .await
            .map_err(|e| GeoDirectoryError::Network(format!("Failed to fetch states: {}", e)))?;

        // Unknown country is not an error, just an empty subdivision list
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(GeoDirectoryError::ServiceError(format!(
                "States request failed: {}",
                response.status()
            )));
        }

        let body: StatesResponse = response.json().await.map_err(|e| {
            GeoDirectoryError::UnexpectedResponse(format!("Failed to parse states: {}", e))
        })?;

        Ok(body
            .data
            .map(|data| data.states.into_iter().map(|s| s.name).collect())
            .unwrap_or_default())
    }

    async fn cities(
        &self,
        country: &str,
        state: &str,
    ) -> Result<Vec<String>, GeoDirectoryError> {
        let url = format!(
            "{}/api/v0.1/countries/state/cities",
            self.config.locations_base_url
        );

        let response = self
            .client
            .post(&url)
            .json(&CitiesRequest { country, state })
            .send()
            .await
            .map_err(|e| GeoDirectoryError::Network(format!("Failed to fetch cities: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(GeoDirectoryError::ServiceError(format!(
                "Cities request failed: {}",
                response.status()
            )));
        }

        let body: CitiesResponse = response.json().await.map_err(|e| {
            GeoDirectoryError::UnexpectedResponse(format!("Failed to parse cities: {}", e))
        })?;

        Ok(body.data.unwrap_or_default())
    }
}

#[derive(Serialize)]
struct StatesRequest<'a> {
    country: &'a str,
}

#[derive(Serialize)]
struct CitiesRequest<'a> {
    country: &'a str,
    state: &'a str,
}

#[derive(Deserialize)]
struct StatesResponse {
    data: Option<StatesData>,
}

#[derive(Deserialize)]
struct StatesData {
    #[serde(default)]
    states: Vec<StateEntry>,
}

#[derive(Deserialize)]
struct StateEntry {
    name: String,
}

#[derive(Deserialize)]
struct CitiesResponse {
    data: Option<Vec<String>>,
}

/// One country of the restcountries directory
#[derive(Deserialize)]
struct RestCountry {
    #[serde(default)]
    name: RestCountryName,
    #[serde(default)]
    cca2: String,
    #[serde(default)]
    idd: RestIdd,
}

#[derive(Deserialize, Default)]
struct RestCountryName {
    #[serde(default)]
    common: String,
}

/// International direct dialing block: root prefix plus suffixes
#[derive(Deserialize, Default)]
struct RestIdd {
    root: Option<String>,
    #[serde(default)]
    suffixes: Vec<String>,
}

impl RestCountry {
    /// Map a directory entry to a calling-code option
    ///
    /// The calling code is the idd root joined with the first suffix
    /// (root alone when there are none). Entries without a root carry no
    /// dialing prefix and are skipped.
    fn into_option(self) -> Option<CallingCodeOption> {
        let root = self.idd.root?;
        let calling_code = match self.idd.suffixes.first() {
            Some(suffix) => format!("{}{}", root, suffix),
            None => root,
        };
        Some(CallingCodeOption {
            code: self.cca2,
            name: self.name.common,
            calling_code,
        })
    }
}
