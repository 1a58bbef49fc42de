//! HTTP adapter for the engine's inventory API.

use std::time::Duration;

use async_trait::async_trait;
use pantry_domain::{InventoryChange, InventoryItem, ItemName};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::ports::outbound::{ClientError, InventoryApiPort};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct QuantityRequest {
    quantity: i64,
}

#[derive(Debug, Serialize)]
struct RenameRequest<'a> {
    new_name: &'a str,
}

/// reqwest client for `/api/inventory`.
#[derive(Clone)]
pub struct EngineApiClient {
    client: Client,
    base_url: Url,
}

impl EngineApiClient {
    /// `base_url` is the engine's root, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{} cannot hold a path",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self { client, base_url })
    }

    /// `{base}/api/inventory/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "inventory"])
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl InventoryApiPort for EngineApiClient {
    async fn list(&self) -> Result<Vec<InventoryItem>, ClientError> {
        let url = self.endpoint(&[])?;
        self.send(self.client.get(url)).await
    }

    async fn add(&self, name: &ItemName, quantity: i64) -> Result<InventoryChange, ClientError> {
        let url = self.endpoint(&[name.as_str(), "add"])?;
        self.send(self.client.post(url).json(&QuantityRequest { quantity }))
            .await
    }

    async fn remove(
        &self,
        name: &ItemName,
        quantity: i64,
    ) -> Result<InventoryChange, ClientError> {
        let url = self.endpoint(&[name.as_str(), "remove"])?;
        self.send(self.client.post(url).json(&QuantityRequest { quantity }))
            .await
    }

    async fn rename(
        &self,
        old_name: &ItemName,
        new_name: &ItemName,
    ) -> Result<InventoryChange, ClientError> {
        let url = self.endpoint(&[old_name.as_str(), "rename"])?;
        let body = RenameRequest {
            new_name: new_name.as_str(),
        };
        self.send(self.client.post(url).json(&body)).await
    }

    async fn delete(&self, name: &ItemName) -> Result<InventoryChange, ClientError> {
        let url = self.endpoint(&[name.as_str()])?;
        self.send(self.client.delete(url)).await
    }
}
