//! Raw HTTP plumbing shared by the client's endpoint methods.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::AnalysisClient;
use crate::error::{ApiError, Result};
use crate::utils::truncate_for_log;

impl AnalysisClient {
    /// Perform a GET and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        Self::decode_response(response).await
    }

    /// Perform a POST with a JSON body and decode the JSON response.
    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        Self::decode_response(response).await
    }

    async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        serde_json::from_str(&response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(&response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

/// Split reqwest transport failures into timeout vs. everything else.
fn classify_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout {
            detail: e.to_string(),
        }
    } else {
        ApiError::NetworkError {
            detail: e.to_string(),
        }
    }
}
