//! Client for the image inference service.
//!
//! The service computes clothing-image embeddings (used to rank
//! complementary items) and removes image backgrounds on upload. Both are
//! best-effort from the caller's perspective: a wardrobe without embeddings
//! still produces suggestions, ranked by wear count instead.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use rewear_core::{ApplicationError, InferenceConfig};

#[derive(Debug, Error)]
pub enum InferenceError {
    /// Transient: the service is unreachable, timed out, or returned 5xx.
    #[error("inference service unavailable: {0}")]
    Unavailable(String),
    /// The service answered but the payload was not what we asked for.
    #[error("unexpected inference response: {0}")]
    BadResponse(String),
    /// The service rejected the request itself (4xx).
    #[error("inference request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl From<InferenceError> for ApplicationError {
    fn from(error: InferenceError) -> Self {
        ApplicationError::Inference(error.to_string())
    }
}

/// Seam for embedding and background-removal providers. Production talks to
/// the HTTP service; tests use [`StaticEmbeddingService`].
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Computes the embedding vector for an image, addressed by URL.
    async fn embed(&self, image_url: &str) -> Result<Vec<f32>, InferenceError>;

    /// Removes the background from an image and returns the URL of the
    /// processed copy.
    async fn remove_background(&self, image_url: &str) -> Result<String, InferenceError>;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct RemoveBackgroundResponse {
    image_url: String,
}

impl HttpInferenceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| InferenceError::Unavailable(error.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        })
    }

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, InferenceError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.post(&url).json(body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }

        let response = request.send().await.map_err(|error| {
            warn!(url = %url, error = %error, "inference request failed");
            InferenceError::Unavailable(error.to_string())
        })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(InferenceError::Unavailable(format!("{url} returned {status}")));
        }
        if status.is_client_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Rejected { status: status.as_u16(), message });
        }
        Ok(response)
    }
}

#[async_trait]
impl EmbeddingService for HttpInferenceClient {
    async fn embed(&self, image_url: &str) -> Result<Vec<f32>, InferenceError> {
        let body = serde_json::json!({ "image_url": image_url });
        let response = self.post_json("/v1/embed", &body).await?;
        let payload: EmbedResponse = response
            .json()
            .await
            .map_err(|error| InferenceError::BadResponse(error.to_string()))?;

        if payload.embedding.is_empty() {
            return Err(InferenceError::BadResponse("empty embedding vector".to_owned()));
        }
        debug!(dimensions = payload.embedding.len(), "computed image embedding");
        Ok(payload.embedding)
    }

    async fn remove_background(&self, image_url: &str) -> Result<String, InferenceError> {
        let body = serde_json::json!({ "image_url": image_url });
        let response = self.post_json("/v1/remove-background", &body).await?;
        let payload: RemoveBackgroundResponse = response
            .json()
            .await
            .map_err(|error| InferenceError::BadResponse(error.to_string()))?;
        Ok(payload.image_url)
    }
}

/// Test double returning a fixed embedding for every image.
pub struct StaticEmbeddingService {
    embedding: Vec<f32>,
}

impl StaticEmbeddingService {
    pub fn new(embedding: Vec<f32>) -> Self {
        Self { embedding }
    }
}

#[async_trait]
impl EmbeddingService for StaticEmbeddingService {
    async fn embed(&self, _image_url: &str) -> Result<Vec<f32>, InferenceError> {
        Ok(self.embedding.clone())
    }

    async fn remove_background(&self, image_url: &str) -> Result<String, InferenceError> {
        Ok(image_url.to_owned())
    }
}
