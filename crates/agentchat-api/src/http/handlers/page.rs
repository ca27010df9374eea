//! Static chat page.

use axum::response::Html;

/// The chat widget: styles for the rendered block classes plus the script
/// that posts to `/chat`.
const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET / -- serve the chat page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
