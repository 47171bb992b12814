//! HTTP implementation of the remote store gateway.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::remote::{RemoteRecord, RemoteStore};

const COLLECTION_PATH: &str = "colors";

/// Remote color collection behind a JSON HTTP endpoint.
///
/// `GET {endpoint}/colors` returns an array of records;
/// `POST {endpoint}/colors` creates one record.
#[derive(Clone)]
pub struct HttpRemoteStore {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRemoteStore {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint.into())?;
        Ok(Self {
            endpoint,
            client: reqwest::Client::builder().build()?,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{COLLECTION_PATH}", self.endpoint)
    }
}

impl RemoteStore for HttpRemoteStore {
    async fn list_all(&self) -> Result<Vec<RemoteRecord>> {
        let response = self
            .client
            .get(self.collection_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|error| Error::RemoteList(error.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteList(parse_api_error(status, &body)));
        }

        response
            .json::<Vec<RemoteRecord>>()
            .await
            .map_err(|error| Error::RemoteList(error.to_string()))
    }

    async fn create_one(&self, hex: &str, timestamp: &str) -> Result<()> {
        let record = RemoteRecord {
            hex: hex.to_string(),
            timestamp: timestamp.to_string(),
        };

        let response = self
            .client
            .post(self.collection_url())
            .json(&record)
            .send()
            .await
            .map_err(|error| Error::RemoteWrite(error.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteWrite(parse_api_error(status, &body)));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_endpoint(raw: String) -> Result<String> {
    let endpoint = raw.trim();
    if endpoint.is_empty() {
        return Err(Error::InvalidConfiguration(
            "endpoint must not be empty".to_string(),
        ));
    }
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(endpoint.trim_end_matches('/').to_string())
    } else {
        Err(Error::InvalidConfiguration(
            "endpoint must include http:// or https://".to_string(),
        ))
    }
}
