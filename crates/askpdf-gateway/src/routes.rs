//! API route handlers for the gateway.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use super::server::AppState;

/// Fixed instruction prepended to every generation prompt.
const PROMPT_INSTRUCTION: &str = "Use the following context to answer the question, \
and if the answer is not directly available in the context then use your own intelligence \
and give appropriate and correct answer. Don't use assterics (*) symbol while answering:";

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Answer a question grounded in the ingested document.
///
/// Embeds the question, ranks the stored chunks by cosine similarity,
/// joins the top-k chunk texts into a context, and forwards the composed
/// prompt to the generation service. The completion is returned verbatim.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> (StatusCode, Json<Value>) {
    let Some(question) = body.question.filter(|q| !q.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Question is required"})),
        );
    };

    let query = match state.embedder.embed(&question).await {
        Ok(v) => v,
        Err(e) => return internal_error(e),
    };

    let context = state
        .store
        .read()
        .expect("vector store lock poisoned")
        .top_k(&query, state.config.top_k)
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!("{PROMPT_INSTRUCTION}\n{context}\n\nQuestion: {question}");

    match state.generator.generate(&prompt).await {
        Ok(answer) => (StatusCode::OK, Json(json!({"answer": answer}))),
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: askpdf_core::error::AskPdfError) -> (StatusCode, Json<Value>) {
    tracing::error!("❌ Error in /ask: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": e.to_string()})),
    )
}

/// Health check endpoint. Reports whether the startup ingestion pass has
/// finished and how many chunks it stored.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let store = state.store.read().expect("vector store lock poisoned");
    Json(json!({
        "status": "ok",
        "service": "askpdf-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "chunks": store.len(),
        "ready": store.is_ready(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use askpdf_core::config::AskPdfConfig;
    use askpdf_core::error::{AskPdfError, Result};
    use askpdf_core::traits::{Embedder, Generator};
    use askpdf_knowledge::store::VectorStore;
    use async_trait::async_trait;
    use std::sync::{Mutex, RwLock};

    struct StubEmbedder {
        fail: bool,
    }

    #[async_trait]
    impl Embedder for StubEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            if self.fail {
                return Err(AskPdfError::Provider("embedding quota exhausted".into()));
            }
            Ok(vec![1.0, 0.0])
        }
    }

    /// Records the prompt it was handed and replies with a canned answer,
    /// or fails with a canned message.
    struct StubGenerator {
        reply: std::result::Result<String, String>,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubGenerator {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                last_prompt: Mutex::new(None),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                last_prompt: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl Generator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(AskPdfError::Provider(msg.clone())),
            }
        }
    }

    fn test_state(
        store: VectorStore,
        embedder: StubEmbedder,
        generator: Arc<StubGenerator>,
    ) -> Arc<AppState> {
        Arc::new(AppState {
            config: AskPdfConfig::default(),
            store: Arc::new(RwLock::new(store)),
            embedder: Arc::new(embedder),
            generator,
            start_time: std::time::Instant::now(),
        })
    }

    /// Entries scoring [0.9, 0.5, 0.8] against the stub query (1, 0).
    fn seeded_store() -> VectorStore {
        let mut store = VectorStore::new();
        for (text, score) in [("A", 0.9f32), ("B", 0.5), ("C", 0.8)] {
            let theta = score.acos();
            store.add_entry(text, vec![theta.cos(), theta.sin()]);
        }
        store
    }

    #[tokio::test]
    async fn test_ask_without_question_is_bad_request() {
        let state = test_state(
            seeded_store(),
            StubEmbedder { fail: false },
            StubGenerator::answering("unused"),
        );
        let body = Json(AskRequest { question: None });
        let (status, json) = ask(State(state), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0, json!({"error": "Question is required"}));
    }

    #[tokio::test]
    async fn test_ask_with_blank_question_is_bad_request() {
        let state = test_state(
            seeded_store(),
            StubEmbedder { fail: false },
            StubGenerator::answering("unused"),
        );
        let body = Json(AskRequest { question: Some("   ".into()) });
        let (status, _) = ask(State(state), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ask_returns_generation_verbatim() {
        let generator = StubGenerator::answering("Consider the science stream.");
        let state = test_state(seeded_store(), StubEmbedder { fail: false }, generator.clone());
        let body = Json(AskRequest { question: Some("What should I study?".into()) });

        let (status, json) = ask(State(state), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.0["answer"], "Consider the science stream.");

        // The prompt carries the top-3 chunks in descending-score order
        // followed by the question.
        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("A\nC\nB"));
        assert!(prompt.ends_with("Question: What should I study?"));
    }

    #[tokio::test]
    async fn test_ask_over_empty_store_still_answers() {
        let generator = StubGenerator::answering("No context available.");
        let state = test_state(VectorStore::new(), StubEmbedder { fail: false }, generator.clone());
        let body = Json(AskRequest { question: Some("Anything?".into()) });

        let (status, _) = ask(State(state), body).await;
        assert_eq!(status, StatusCode::OK);

        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        // Empty context leaves an empty line between instruction and question.
        assert!(prompt.contains(":\n\n\nQuestion:"));
    }

    #[tokio::test]
    async fn test_generation_failure_is_internal_error() {
        let state = test_state(
            seeded_store(),
            StubEmbedder { fail: false },
            StubGenerator::failing("model overloaded"),
        );
        let body = Json(AskRequest { question: Some("Hi".into()) });

        let (status, json) = ask(State(state), body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json.0["error"].as_str().unwrap().contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_embedding_failure_is_internal_error() {
        let state = test_state(
            seeded_store(),
            StubEmbedder { fail: true },
            StubGenerator::answering("unreached"),
        );
        let body = Json(AskRequest { question: Some("Hi".into()) });

        let (status, json) = ask(State(state), body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json.0["error"]
                .as_str()
                .unwrap()
                .contains("embedding quota exhausted")
        );
    }

    #[tokio::test]
    async fn test_health_reports_store_state() {
        let state = test_state(
            seeded_store(),
            StubEmbedder { fail: false },
            StubGenerator::answering("unused"),
        );
        let json = health_check(State(state.clone())).await;
        assert_eq!(json.0["status"], "ok");
        assert_eq!(json.0["chunks"], 3);
        assert_eq!(json.0["ready"], false);

        state.store.write().unwrap().mark_ready();
        let json = health_check(State(state)).await;
        assert_eq!(json.0["ready"], true);
    }
}
