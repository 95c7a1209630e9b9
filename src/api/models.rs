use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::data::AnnotatedDoc;
use crate::extract::PatternKind;
use crate::types::{Filters, Relation, SentenceRelations};

/// Request model for extraction over pre-parsed documents
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    /// Which tuples to extract: "sv", "svo" or "svao"
    #[schema(value_type = String, example = "svo")]
    pub pattern: PatternKind,
    /// Annotated sentences in the annotator's wire format
    #[schema(value_type = Vec<Object>)]
    pub documents: Vec<AnnotatedDoc>,
    /// Keep only relations whose subject phrase is listed (optional)
    #[schema(example = json!(["john"]))]
    pub subjects: Option<Vec<String>>,
    /// Keep only verbs whose lemma is listed (optional)
    #[schema(example = json!(["eat"]))]
    pub verbs: Option<Vec<String>>,
}

/// Request model for annotate-then-extract over raw text
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProcessRequest {
    /// Which tuples to extract: "sv", "svo" or "svao"
    #[schema(value_type = String, example = "svao")]
    pub pattern: PatternKind,
    /// Raw texts, one annotated document each
    #[schema(example = json!(["John ate the worst hamburger"]))]
    pub articles: Vec<String>,
    /// Keep only relations whose subject phrase is listed (optional)
    pub subjects: Option<Vec<String>>,
    /// Keep only verbs whose lemma is listed (optional)
    pub verbs: Option<Vec<String>>,
}

/// Response model for extraction results
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    /// The pattern that was run
    #[schema(value_type = String, example = "svo")]
    pub pattern: PatternKind,
    /// Extraction duration in seconds
    #[schema(example = 0.002)]
    pub duration: f32,
    /// Total number of relations across all documents
    #[schema(example = 1)]
    pub result_count: usize,
    /// One entry per input document, in input order
    pub results: Vec<DocumentRelations>,
}

/// Relations found in one document
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentRelations {
    /// Position of the document in the request
    #[schema(example = 0)]
    pub document: usize,
    /// Extracted tuples
    #[schema(value_type = Vec<Object>, example = json!([{"subject": "john", "verb": "ate", "object": "hamburger"}]))]
    pub relations: Vec<Relation>,
}

/// Error response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Token index 7 out of bounds for sentence of length 5")]
    pub error: String,
    /// Error type
    #[schema(example = "ValidationError")]
    pub error_type: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,
    /// Service name
    #[schema(example = "SVO Extraction API")]
    pub service: String,
    /// Whether `/process` can reach an annotator
    #[schema(example = false)]
    pub annotator: bool,
}

/// Dependency label inventories used by the extractors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LabelsResponse {
    #[schema(example = json!(["nsubj", "nsubjpass", "csubj", "csubjpass", "agent", "expl"]))]
    pub subjects: Vec<String>,
    #[schema(example = json!(["dobj", "dative", "attr", "oprd"]))]
    pub objects: Vec<String>,
    pub adjectives: Vec<String>,
    pub compounds: Vec<String>,
    pub prepositions: Vec<String>,
    #[schema(example = json!(["no", "not", "n't", "never", "none"]))]
    pub negations: Vec<String>,
}

impl ExtractRequest {
    pub fn filters(&self) -> Filters {
        build_filters(&self.subjects, &self.verbs)
    }
}

impl ProcessRequest {
    pub fn filters(&self) -> Filters {
        build_filters(&self.subjects, &self.verbs)
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, error_type: &str) -> Self {
        Self {
            error: error.into(),
            error_type: error_type.to_string(),
        }
    }
}

impl ExtractResponse {
    pub fn new(pattern: PatternKind, duration: f32, sentences: Vec<SentenceRelations>) -> Self {
        let results: Vec<DocumentRelations> = sentences
            .into_iter()
            .map(|s| DocumentRelations {
                document: s.sentence,
                relations: s.relations,
            })
            .collect();

        Self {
            pattern,
            duration,
            result_count: results.iter().map(|r| r.relations.len()).sum(),
            results,
        }
    }
}

// Subject phrases are compared lowercased
fn build_filters(subjects: &Option<Vec<String>>, verbs: &Option<Vec<String>>) -> Filters {
    let mut filters = Filters::new();
    if let Some(subjects) = subjects {
        filters = filters.with_subjects(subjects.iter().map(|s| s.to_lowercase()));
    }
    if let Some(verbs) = verbs {
        filters = filters.with_verbs(verbs.iter().cloned());
    }
    filters
}
