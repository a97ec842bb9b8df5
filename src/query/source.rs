//! Model list sources
//!
//! Where the polling service reads the model list from.

use crate::types::model::{parse_descriptors, ModelDescriptor};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single read of the model list
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Something that can list the locally available models
#[async_trait]
pub trait ModelSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ModelDescriptor>, FetchError>;
}

/// Reads the model list from the backend over HTTP
pub struct HttpModelSource {
    client: reqwest::Client,
    url: String,
}

impl HttpModelSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ModelDeck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ModelSource for HttpModelSource {
    async fn fetch(&self) -> Result<Vec<ModelDescriptor>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let entries: Vec<Value> = serde_json::from_slice(&body)?;
        Ok(parse_descriptors(entries))
    }
}
