use crate::db::Database;
use crate::llm::LlmClient;

/// Shared application state, constructed once in `run_server` and injected
/// into every handler.
pub struct AppState {
    pub db: Database,
    pub llm: LlmClient,
}
