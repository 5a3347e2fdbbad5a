//! Guidance generation — the request/response lifecycle around the single
//! Gemini call.
//!
//! Flow: validate input → build prompt → one external call → settle with
//! either the generated text or a human-readable error message. Upstream
//! failures are caught here and surfaced as response text; they never
//! propagate as HTTP failures, so the form is never left unresolved.

use serde::Deserialize;
use tracing::{info, warn};

use crate::guidance::prompts::build_guidance_prompt;
use crate::llm_client::TextGenerator;

/// Shown when the jurisdiction or the situation text is missing.
pub const MISSING_INPUT_MESSAGE: &str = "Please select a country and describe the situation.";

/// Request body for guidance generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GuidanceRequest {
    pub country: String,
    pub situation: String,
}

/// A settled guidance request. `generated` is true only when the text came
/// back from the model — guidance messages and error text set it to false.
#[derive(Debug, Clone)]
pub struct GuidanceOutcome {
    pub text: String,
    pub generated: bool,
}

/// Runs one guidance request to settlement.
///
/// Missing input short-circuits with the fixed guidance message and performs
/// no external call. Every invocation is independent: no retry, no queue,
/// no cache.
pub async fn generate_guidance(
    llm: &dyn TextGenerator,
    request: &GuidanceRequest,
) -> GuidanceOutcome {
    if request.country.trim().is_empty() || request.situation.trim().is_empty() {
        return GuidanceOutcome {
            text: MISSING_INPUT_MESSAGE.to_string(),
            generated: false,
        };
    }

    let prompt = build_guidance_prompt(request.country.trim(), request.situation.trim());
    info!("Requesting guidance for jurisdiction '{}'", request.country);

    match llm.generate(&prompt).await {
        Ok(text) => GuidanceOutcome {
            text,
            generated: true,
        },
        Err(e) => {
            warn!("Guidance generation failed: {e}");
            GuidanceOutcome {
                text: format!("Error: {e}"),
                generated: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Stub generator recording every prompt it receives.
    struct StubGenerator {
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
        reply: fn() -> Result<String, LlmError>,
    }

    impl StubGenerator {
        fn new(reply: fn() -> Result<String, LlmError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                reply,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.reply)()
        }
    }

    fn request(country: &str, situation: &str) -> GuidanceRequest {
        GuidanceRequest {
            country: country.to_string(),
            situation: situation.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_country_short_circuits_without_external_call() {
        let stub = StubGenerator::new(|| Ok("unused".to_string()));
        let outcome = generate_guidance(&stub, &request("", "speeding")).await;

        assert_eq!(outcome.text, MISSING_INPUT_MESSAGE);
        assert!(!outcome.generated);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_situation_short_circuits_without_external_call() {
        let stub = StubGenerator::new(|| Ok("unused".to_string()));
        let outcome = generate_guidance(&stub, &request("France", "   ")).await;

        assert_eq!(outcome.text, MISSING_INPUT_MESSAGE);
        assert!(!outcome.generated);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_returns_model_text_verbatim() {
        let stub = StubGenerator::new(|| Ok("Law: Article X...".to_string()));
        let outcome =
            generate_guidance(&stub, &request("France", "parked in a no-parking zone")).await;

        assert_eq!(outcome.text, "Law: Article X...");
        assert!(outcome.generated);
        assert_eq!(stub.call_count(), 1);

        let prompts = stub.prompts.lock().unwrap();
        assert!(prompts[0].contains("France"));
        assert!(prompts[0].contains("parked in a no-parking zone"));
    }

    #[tokio::test]
    async fn test_failure_embeds_error_detail_in_response_text() {
        let stub = StubGenerator::new(|| {
            Err(LlmError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        });
        let outcome = generate_guidance(&stub, &request("France", "speeding")).await;

        assert!(outcome.text.starts_with("Error:"));
        assert!(outcome.text.contains("quota exceeded"));
        assert!(!outcome.generated);
        assert_eq!(stub.call_count(), 1);
    }
}
