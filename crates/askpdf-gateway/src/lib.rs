//! # askpdf Gateway
//!
//! The HTTP surface: one question-answering endpoint plus a health probe,
//! served by axum behind a single-origin CORS policy.

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
