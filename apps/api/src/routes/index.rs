use axum::response::Html;

/// GET /
/// Serves the single-page form. The page owns the user-entered state
/// (jurisdiction, situation text) and talks to the JSON API.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
