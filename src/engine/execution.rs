//! Batch extraction methods for ExtractionEngine

use rayon::prelude::*;

use crate::data::AnnotatedDoc;
use crate::engine::core::{ExtractionEngine, ProcessError};
use crate::extract::PatternKind;
use crate::tree::{Sentence, TreeError};
use crate::types::{Filters, SentenceRelations};

impl ExtractionEngine {
    /// Run `pattern` over every sentence. Sentences are independent, so the
    /// batch is processed in parallel; output order follows input order.
    pub fn extract(
        &self,
        pattern: PatternKind,
        sentences: &[Sentence],
        filters: &Filters,
    ) -> Vec<SentenceRelations> {
        let results: Vec<SentenceRelations> = sentences
            .par_iter()
            .enumerate()
            .map(|(sentence, tree)| SentenceRelations {
                sentence,
                relations: self.extractor.extract(pattern, tree, filters),
            })
            .collect();

        log::debug!(
            "{} extraction over {} sentences produced {} relations",
            pattern,
            sentences.len(),
            results.iter().map(|r| r.relations.len()).sum::<usize>()
        );
        results
    }

    /// Build trees from annotator output, then extract
    pub fn extract_documents(
        &self,
        pattern: PatternKind,
        documents: &[AnnotatedDoc],
        filters: &Filters,
    ) -> Result<Vec<SentenceRelations>, TreeError> {
        let sentences = build_sentences(documents)?;
        Ok(self.extract(pattern, &sentences, filters))
    }

    /// Annotate raw texts with the configured annotator, then extract
    pub async fn process(
        &self,
        pattern: PatternKind,
        texts: &[String],
        filters: &Filters,
    ) -> Result<Vec<SentenceRelations>, ProcessError> {
        let annotator = self.annotator.as_ref().ok_or(ProcessError::NoAnnotator)?;
        let documents = annotator.annotate(texts).await.map_err(ProcessError::Annotator)?;
        log::info!("Annotated {} texts into {} documents", texts.len(), documents.len());
        Ok(self.extract_documents(pattern, &documents, filters)?)
    }
}

/// Convert annotator documents into trees in parallel, failing on the first
/// invalid one
pub fn build_sentences(documents: &[AnnotatedDoc]) -> Result<Vec<Sentence>, TreeError> {
    documents.par_iter().map(Sentence::try_from).collect()
}
