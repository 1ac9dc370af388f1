//! HTTP client for the vehicle service.
//!
//! Submissions are `POST`ed as a JSON object of nine string fields. The
//! Metrics tab lists stored vehicles with a `GET` on the same collection.

mod error;
#[cfg(test)]
pub(crate) mod stub;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::Config;
use crate::model::FormState;

pub use error::ClientError;

/// Sends vehicle records to the configured endpoint.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct VehicleClient {
    http: reqwest::Client,
    endpoint: String,
    list_endpoint: String,
}

impl VehicleClient {
    /// Builds a client from the configured endpoints and timeout.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            list_endpoint: config.list_endpoint().to_string(),
        })
    }

    /// Returns the URL submissions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts a form snapshot and returns the parsed JSON response.
    pub async fn submit(&self, form: &FormState) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(form)
            .send()
            .await
            .map_err(ClientError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        response.json::<Value>().await.map_err(ClientError::Decode)
    }

    /// Fetches every stored vehicle.
    pub async fn list(&self) -> Result<Vec<Value>, ClientError> {
        let response = self
            .http
            .get(&self.list_endpoint)
            .send()
            .await
            .map_err(ClientError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(ClientError::Decode)
    }
}
