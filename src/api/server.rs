use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use anyhow::Result;
use std::path::PathBuf;
use crate::engine::ExtractionEngine;
use crate::api::handlers::{health_check, list_labels, extract_relations, process_articles};

/// Configuration for the API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the annotator backing `/process`
    pub annotator_url: Option<String>,
    /// YAML file with extractor switches
    pub extractor_config: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            annotator_url: None,
            extractor_config: None,
        }
    }
}

impl ApiConfig {
    /// Build the engine this configuration describes
    pub fn build_engine(&self) -> Result<ExtractionEngine> {
        let engine = match &self.extractor_config {
            Some(path) => ExtractionEngine::from_config_file(path)?,
            None => ExtractionEngine::default(),
        };
        Ok(match &self.annotator_url {
            Some(url) => engine.with_remote_annotator(url),
            None => engine,
        })
    }
}

/// Register the `/api/v1` routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .route("/labels", web::get().to(list_labels))
            .route("/extract", web::post().to(extract_relations))
            .route("/process", web::post().to(process_articles)),
    );
}

/// Cross-origin policy: any origin, method and header, preflight included
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Start the API server
pub async fn start_server(config: ApiConfig) -> Result<()> {
    let engine = config.build_engine()?;
    let engine_data = web::Data::new(engine);

    log::info!("Starting SVO extraction API server on {}:{}", config.host, config.port);
    match &config.annotator_url {
        Some(url) => log::info!("Annotator: {}", url),
        None => log::warn!("No annotator configured; /api/v1/process will answer 503"),
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors())
            .app_data(engine_data.clone())
            .configure(configure)
    })
    .bind(format!("{}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
