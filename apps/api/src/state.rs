use std::sync::Arc;

use crate::companions::Companions;
use crate::config::Config;
use crate::llm_client::Generator;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence. Default: PgStore.
    pub store: Arc<dyn Store>,
    /// Text generation. Default: LlmClient (Gemini).
    pub generator: Arc<dyn Generator>,
    /// In-memory companion agents, one mutex for all of them.
    pub companions: Arc<Companions>,
    pub config: Config,
}
