//! # askpdf Providers
//!
//! HTTP clients for the hosted AI services. Only Gemini is implemented;
//! both the embedding model and the generation model live behind one
//! client since they share endpoint shape and auth.

pub mod gemini;

pub use gemini::GeminiClient;
