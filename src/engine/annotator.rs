//! Seam to the external dependency parser.
//!
//! Model loading and parsing live behind [`Annotator`]; the extraction core
//! only ever sees the documents it returns.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::data::{AnnotatedBatch, AnnotatedDoc, ArticlesRequest};

/// Turns raw texts into dependency-annotated documents, one per text
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, texts: &[String]) -> Result<Vec<AnnotatedDoc>>;
}

/// Client for an annotator service exposing `POST /process`
#[derive(Debug, Clone)]
pub struct RemoteAnnotator {
    client: Client,
    base_url: String,
}

impl RemoteAnnotator {
    /// # Arguments
    /// * `base_url` - Base URL of the annotator (e.g., "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Annotator for RemoteAnnotator {
    async fn annotate(&self, texts: &[String]) -> Result<Vec<AnnotatedDoc>> {
        let url = format!("{}/process", self.base_url);
        let request = ArticlesRequest { articles: texts.to_vec() };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to connect to annotator at {}: {}", url, e))?;

        if !response.status().is_success() {
            return Err(anyhow!("Annotator returned error: {}", response.status()));
        }

        let batch: AnnotatedBatch = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse annotator response: {}", e))?;

        if batch.result.len() != texts.len() {
            log::warn!(
                "Annotator returned {} documents for {} texts",
                batch.result.len(),
                texts.len()
            );
        }

        Ok(batch.result)
    }
}
