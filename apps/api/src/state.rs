use crate::llm_client::LlmClient;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
/// Config stays out: everything handlers need is baked into the clients at startup.
#[derive(Clone)]
pub struct AppState {
    /// In-memory catalog, looks, and feedback. Rebuilt empty on every restart.
    pub store: Store,
    pub llm: LlmClient,
}
