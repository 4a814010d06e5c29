//! # askpdf Core
//!
//! Shared foundation for the askpdf workspace: configuration loading,
//! the error taxonomy, and the provider traits the gateway depends on.

pub mod config;
pub mod error;
pub mod traits;

pub use config::AskPdfConfig;
pub use error::{AskPdfError, Result};
pub use traits::{Embedder, Generator};
