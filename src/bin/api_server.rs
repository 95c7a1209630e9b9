use svo_extract::{start_server, ApiConfig};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "svo-api")]
#[command(about = "SVO Extraction API Server")]
struct Args {
    /// Host to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Base URL of the dependency annotator (enables /api/v1/process)
    #[arg(long)]
    annotator_url: Option<String>,

    /// Extractor configuration file (YAML)
    #[arg(long)]
    extractor_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    log::info!("Starting SVO extraction API server...");
    log::info!(
        "Configuration: host={}, port={}, annotator_url={:?}, extractor_config={:?}",
        args.host, args.port, args.annotator_url, args.extractor_config
    );

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        annotator_url: args.annotator_url,
        extractor_config: args.extractor_config,
    };

    start_server(config).await?;

    Ok(())
}
