use std::sync::Arc;

use crate::guidance::single_flight::InFlight;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single text-generation capability. Behind a trait so handlers are
    /// testable against a stub.
    pub llm: Arc<dyn TextGenerator>,
    /// Guards against concurrent duplicate submissions — at most one external
    /// call is in flight at a time.
    pub in_flight: InFlight,
}
