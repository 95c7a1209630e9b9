use actix_web::{web, HttpResponse, Result};
use crate::api::models::{
    ErrorResponse, ExtractRequest, ExtractResponse, HealthResponse, LabelsResponse, ProcessRequest,
};
use crate::engine::{ExtractionEngine, ProcessError};
use crate::extract::labels;
use std::time::Instant;

/// Health check endpoint
pub async fn health_check(engine: web::Data<ExtractionEngine>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "SVO Extraction API".to_string(),
        annotator: engine.has_annotator(),
    }))
}

/// Label inventories endpoint
pub async fn list_labels() -> Result<HttpResponse> {
    let owned = |set: &[&str]| set.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(LabelsResponse {
        subjects: owned(labels::SUBJECTS),
        objects: owned(labels::OBJECTS),
        adjectives: owned(labels::ADJECTIVES),
        compounds: owned(labels::COMPOUNDS),
        prepositions: owned(labels::PREPOSITIONS),
        negations: owned(labels::NEGATIONS),
    }))
}

/// Extract relations from pre-parsed documents
pub async fn extract_relations(
    engine: web::Data<ExtractionEngine>,
    request: web::Json<ExtractRequest>,
) -> Result<HttpResponse> {
    let filters = request.filters();
    let start_time = Instant::now();

    match engine.extract_documents(request.pattern, &request.documents, &filters) {
        Ok(sentences) => {
            let duration = start_time.elapsed().as_secs_f32();
            Ok(HttpResponse::Ok().json(ExtractResponse::new(request.pattern, duration, sentences)))
        }
        Err(e) => {
            log::warn!("Rejected document batch: {}", e);
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string(), "ValidationError")))
        }
    }
}

/// Annotate raw articles, then extract relations
pub async fn process_articles(
    engine: web::Data<ExtractionEngine>,
    request: web::Json<ProcessRequest>,
) -> Result<HttpResponse> {
    let filters = request.filters();
    let start_time = Instant::now();

    match engine.process(request.pattern, &request.articles, &filters).await {
        Ok(sentences) => {
            let duration = start_time.elapsed().as_secs_f32();
            Ok(HttpResponse::Ok().json(ExtractResponse::new(request.pattern, duration, sentences)))
        }
        Err(e @ ProcessError::NoAnnotator) => Ok(HttpResponse::ServiceUnavailable()
            .json(ErrorResponse::new(e.to_string(), "AnnotatorUnavailable"))),
        Err(e @ ProcessError::Annotator(_)) => {
            log::error!("Annotation failed: {}", e);
            Ok(HttpResponse::BadGateway().json(ErrorResponse::new(e.to_string(), "AnnotatorError")))
        }
        Err(e @ ProcessError::InvalidParse(_)) => {
            log::error!("Annotator output rejected: {}", e);
            Ok(HttpResponse::BadGateway().json(ErrorResponse::new(e.to_string(), "AnnotatorError")))
        }
    }
}
