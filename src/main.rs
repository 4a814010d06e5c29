//! askpdf — retrieval-augmented chatbot backend over a single PDF.
//!
//! Startup wires the Gemini client, an empty vector store, and the HTTP
//! gateway, then spawns the one-shot document ingestion in the background
//! so the server is reachable immediately. Requests arriving before
//! ingestion finishes are answered against whatever has been stored so far.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use askpdf_core::config::AskPdfConfig;
use askpdf_gateway::AppState;
use askpdf_knowledge::store::VectorStore;
use askpdf_providers::GeminiClient;

#[derive(Parser, Debug)]
#[command(name = "askpdf", version, about = "Chatbot backend grounded in one PDF document")]
struct Args {
    /// Path to a config file (default: ~/.askpdf/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listening port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AskPdfConfig::load_from(path)?,
        None => AskPdfConfig::load()?,
    };
    config.apply_env();
    if let Some(port) = args.port {
        config.gateway.port = port;
    }

    if config.api_key.is_empty() {
        tracing::warn!("⚠️ No API key configured — set GEMINI_API_KEY or api_key in config");
    }

    let gemini = Arc::new(GeminiClient::new(&config)?);
    let store = Arc::new(RwLock::new(VectorStore::new()));

    // One-shot background ingestion. Failures are logged inside and never
    // abort the server; it keeps serving over a partial or empty store.
    {
        let store = store.clone();
        let gemini = gemini.clone();
        let path = PathBuf::from(&config.document_path);
        let chunk_size = config.chunk_size;
        tokio::spawn(async move {
            askpdf_knowledge::ingest::ingest_document(&store, gemini.as_ref(), &path, chunk_size)
                .await;
        });
    }

    let state = AppState {
        config,
        store,
        embedder: gemini.clone(),
        generator: gemini,
        start_time: std::time::Instant::now(),
    };

    askpdf_gateway::start(state).await
}
