//! Engine module for batch extraction
//!
//! This module is organized into the following submodules:
//! - `annotator`: the `Annotator` seam and its HTTP client
//! - `core`: Core ExtractionEngine struct and constructors
//! - `execution`: batch extraction methods (parallel over sentences)

pub mod annotator;
pub mod core;
pub mod execution;

// Re-export main types for convenience
pub use annotator::{Annotator, RemoteAnnotator};
pub use core::{ExtractionEngine, ProcessError};
pub use execution::build_sentences;
