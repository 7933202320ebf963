use super::state::AppState;
use super::{health, pages};
use axum::Router;
use axum::routing::get;

/// Page and health routes. Static assets and HTTP tracing are layered on by
/// the application.
pub fn site_router() -> Router<AppState> {
    health::start_clock();

    Router::new()
        .route("/", get(pages::index))
        .route("/posts", get(pages::posts))
        .route("/post/{id}", get(pages::post))
        .route("/projects", get(pages::projects))
        .route("/project/{id}", get(pages::project))
        .route("/about", get(pages::about))
        .route("/tag/{tag}", get(pages::tag))
        .route("/health", get(health::health_handler))
}
