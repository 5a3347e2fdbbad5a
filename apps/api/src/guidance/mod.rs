// Legal guidance engine.
// Implements: input validation, prompt assembly, the single Gemini call, and
// the in-flight guard. All LLM calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod jurisdictions;
pub mod prompts;
pub mod single_flight;
