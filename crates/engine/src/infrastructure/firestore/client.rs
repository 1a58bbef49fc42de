//! Firestore REST client implementing the document store port.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use super::codec::{decode_fields, encode_fields};
use crate::infrastructure::ports::{Document, DocumentData, DocumentStore, StoreError};

/// Default Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";

/// Default database id.
pub const DEFAULT_FIRESTORE_DATABASE: &str = "(default)";

/// Documents requested per listing page.
const LIST_PAGE_SIZE: u32 = 300;

/// Connection settings for a Firestore database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub database: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
            project_id: project_id.into(),
            database: DEFAULT_FIRESTORE_DATABASE.to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Client for Firestore's v1 REST API
#[derive(Clone)]
pub struct FirestoreClient {
    client: Client,
    config: FirestoreConfig,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct WriteDocumentRequest {
    fields: Map<String, Value>,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        let config = FirestoreConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };

        Self { client, config }
    }

    /// `{base}/v1/projects/{p}/databases/{d}/documents/{segments...}` with the
    /// api key attached. Segments are percent-encoded individually.
    fn url(&self, operation: &'static str, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| StoreError::database(operation, format!("bad base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::database(operation, "base url cannot hold a path"))?
            .extend([
                "v1",
                "projects",
                self.config.project_id.as_str(),
                "databases",
                self.config.database.as_str(),
                "documents",
            ])
            .extend(segments);
        if let Some(key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    async fn error_from(operation: &'static str, response: Response) -> StoreError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = format!("HTTP {}: {}", status, body);
        if status == StatusCode::SERVICE_UNAVAILABLE || status == StatusCode::GATEWAY_TIMEOUT {
            StoreError::unavailable(operation, message)
        } else {
            StoreError::database(operation, message)
        }
    }
}

fn document_id(resource_name: &str) -> &str {
    resource_name.rsplit('/').next().unwrap_or(resource_name)
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<DocumentData>, StoreError> {
        let url = self.url("get", &[collection, id])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("get", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from("get", response).await);
        }

        let document: FirestoreDocument = response
            .json()
            .await
            .map_err(StoreError::serialization)?;
        Ok(Some(decode_fields(&document.fields)?))
    }

    async fn set(&self, collection: &str, id: &str, data: DocumentData) -> Result<(), StoreError> {
        // PATCH without an update mask replaces every field of the document.
        let url = self.url("set", &[collection, id])?;
        let body = WriteDocumentRequest {
            fields: encode_fields(&data),
        };
        let response = self
            .client
            .patch(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("set", e))?;

        if !response.status().is_success() {
            return Err(Self::error_from("set", response).await);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = self.url("delete", &[collection, id])?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("delete", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        if !response.status().is_success() {
            return Err(Self::error_from("delete", response).await);
        }
        Ok(())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.url("list_all", &[collection])?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", &LIST_PAGE_SIZE.to_string());
                if let Some(token) = &page_token {
                    query.append_pair("pageToken", token);
                }
            }

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| StoreError::unavailable("list_all", e))?;
            if !response.status().is_success() {
                return Err(Self::error_from("list_all", response).await);
            }

            let page: ListDocumentsResponse = response
                .json()
                .await
                .map_err(StoreError::serialization)?;
            for doc in page.documents {
                let data = decode_fields(&doc.fields)?;
                documents.push(Document::new(document_id(&doc.name), data));
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!(
            collection = %collection,
            count = documents.len(),
            "Listed Firestore collection"
        );
        Ok(documents)
    }
}
