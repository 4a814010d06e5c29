//! askpdf configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskPdfConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    #[serde(default = "default_generation_model")]
    pub generation_model: String,
    /// Path of the single document served by this instance.
    #[serde(default = "default_document_path")]
    pub document_path: String,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

fn default_api_key() -> String { String::new() }
fn default_embedding_model() -> String { "text-embedding-004".into() }
fn default_generation_model() -> String { "gemini-2.0-flash".into() }
fn default_document_path() -> String { "document.pdf".into() }
fn default_chunk_size() -> usize { 500 }
fn default_top_k() -> usize { 3 }

impl Default for AskPdfConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            embedding_model: default_embedding_model(),
            generation_model: default_generation_model(),
            document_path: default_document_path(),
            chunk_size: default_chunk_size(),
            top_k: default_top_k(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl AskPdfConfig {
    /// Load config from the default path (~/.askpdf/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::AskPdfError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::AskPdfError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Overlay environment-provided settings onto the loaded config.
    ///
    /// `GEMINI_API_KEY` / `GOOGLE_API_KEY` win over the file, as do
    /// `PORT` and `ASKPDF_ALLOWED_ORIGIN`.
    pub fn apply_env(&mut self) {
        if let Some(key) = std::env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
        {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.gateway.port = port;
            }
        }
        if let Ok(origin) = std::env::var("ASKPDF_ALLOWED_ORIGIN") {
            if !origin.is_empty() {
                self.gateway.allowed_origin = origin;
            }
        }
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".askpdf")
            .join("config.toml")
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    /// The single frontend origin allowed by CORS.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_port() -> u16 { 5000 }
fn default_host() -> String { "127.0.0.1".into() }
fn default_allowed_origin() -> String { "http://localhost:5173".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allowed_origin: default_allowed_origin(),
        }
    }
}
