//! Axum route handlers for the Guidance API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::guidance::generator::{generate_guidance, GuidanceRequest};
use crate::render::markdown::markdown_to_html;
use crate::state::AppState;

/// Response body: the settled text plus its rendered HTML view.
#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    pub text: String,
    pub html: String,
}

/// POST /api/v1/guidance
///
/// Runs one guidance request to settlement. The in-flight guard is acquired
/// up front and released on every exit path; a second concurrent request is
/// rejected with 409 rather than queued.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GuidanceRequest>,
) -> Result<Json<GuidanceResponse>, AppError> {
    let _guard = state
        .in_flight
        .try_begin()
        .ok_or(AppError::RequestInFlight)?;

    let outcome = generate_guidance(state.llm.as_ref(), &request).await;
    info!(generated = outcome.generated, "Guidance request settled");

    let html = markdown_to_html(&outcome.text);

    Ok(Json(GuidanceResponse {
        text: outcome.text,
        html,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::generator::MISSING_INPUT_MESSAGE;
    use crate::guidance::single_flight::InFlight;
    use crate::llm_client::{LlmError, TextGenerator};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Stub that records whether the in-flight flag was raised while the
    /// external call was outstanding.
    struct FlagProbe {
        in_flight: InFlight,
        observed_in_flight: Arc<AtomicBool>,
        reply: Result<&'static str, u16>,
    }

    #[async_trait]
    impl TextGenerator for FlagProbe {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.observed_in_flight
                .store(self.in_flight.is_in_flight(), Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    message: "quota exceeded".to_string(),
                }),
            }
        }
    }

    fn probe_state(reply: Result<&'static str, u16>) -> (AppState, Arc<AtomicBool>) {
        let in_flight = InFlight::new();
        let observed = Arc::new(AtomicBool::new(false));
        let state = AppState {
            llm: Arc::new(FlagProbe {
                in_flight: in_flight.clone(),
                observed_in_flight: Arc::clone(&observed),
                reply,
            }),
            in_flight,
        };
        (state, observed)
    }

    fn request(country: &str, situation: &str) -> Json<GuidanceRequest> {
        Json(GuidanceRequest {
            country: country.to_string(),
            situation: situation.to_string(),
        })
    }

    #[tokio::test]
    async fn test_flag_raised_during_call_and_cleared_after_success() {
        let (state, observed) = probe_state(Ok("Law: Article X..."));

        let response = handle_generate(State(state.clone()), request("France", "speeding"))
            .await
            .unwrap();

        assert_eq!(response.text, "Law: Article X...");
        assert!(observed.load(Ordering::SeqCst), "flag must be true mid-call");
        assert!(!state.in_flight.is_in_flight());
    }

    #[tokio::test]
    async fn test_flag_cleared_after_failure() {
        let (state, _observed) = probe_state(Err(429));

        let response = handle_generate(State(state.clone()), request("France", "speeding"))
            .await
            .unwrap();

        assert!(response.text.contains("quota exceeded"));
        assert!(!state.in_flight.is_in_flight());
    }

    #[tokio::test]
    async fn test_flag_cleared_after_short_circuit() {
        let (state, _observed) = probe_state(Ok("unused"));

        let response = handle_generate(State(state.clone()), request("", "speeding"))
            .await
            .unwrap();

        assert_eq!(response.text, MISSING_INPUT_MESSAGE);
        assert!(!state.in_flight.is_in_flight());
    }

    #[tokio::test]
    async fn test_concurrent_request_rejected_while_in_flight() {
        let (state, _observed) = probe_state(Ok("unused"));

        let _guard = state.in_flight.try_begin().unwrap();
        let result = handle_generate(State(state.clone()), request("France", "speeding")).await;

        assert!(matches!(result, Err(AppError::RequestInFlight)));
    }

    #[tokio::test]
    async fn test_response_html_renders_markdown() {
        let (state, _observed) = probe_state(Ok("# Applicable Law\n\n- Article X"));

        let response = handle_generate(State(state), request("France", "speeding"))
            .await
            .unwrap();

        assert!(response.html.contains("<h1>"));
        assert!(response.html.contains("<li>"));
    }
}
