//! Core ExtractionEngine struct and constructors

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::engine::annotator::{Annotator, RemoteAnnotator};
use crate::extract::{Extractor, ExtractorConfig};
use crate::tree::TreeError;

/// Failures of the annotate-then-extract path
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("No annotator configured")]
    NoAnnotator,

    #[error("Annotator failed: {0}")]
    Annotator(#[source] anyhow::Error),

    #[error("Annotator returned an invalid parse: {0}")]
    InvalidParse(#[from] TreeError),
}

/// Batch front end over the extractors, optionally paired with an annotator
/// for raw-text input
#[derive(Clone)]
pub struct ExtractionEngine {
    pub(crate) extractor: Extractor,
    pub(crate) annotator: Option<Arc<dyn Annotator>>,
}

impl std::fmt::Debug for ExtractionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionEngine")
            .field("extractor", &self.extractor)
            .field("annotator", &self.annotator.is_some())
            .finish()
    }
}

impl ExtractionEngine {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            extractor: Extractor::new(config),
            annotator: None,
        }
    }

    /// Engine configured from a YAML file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(ExtractorConfig::from_yaml_file(path)?))
    }

    pub fn with_annotator(mut self, annotator: Arc<dyn Annotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    /// Attach a [`RemoteAnnotator`] at `base_url`
    pub fn with_remote_annotator(self, base_url: &str) -> Self {
        log::info!("Using remote annotator at {}", base_url);
        self.with_annotator(Arc::new(RemoteAnnotator::new(base_url)))
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn has_annotator(&self) -> bool {
        self.annotator.is_some()
    }
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
