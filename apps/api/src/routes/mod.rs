pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guidance::{handlers as guidance_handlers, jurisdictions};
use crate::render::handlers as render_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/jurisdictions",
            get(jurisdictions::handle_list_jurisdictions),
        )
        .route("/api/v1/guidance", post(guidance_handlers::handle_generate))
        .route(
            "/api/v1/guidance/export",
            post(render_handlers::handle_export),
        )
        .with_state(state)
}
