use axum::Router;
use folio_kernel::server::AppState;
use folio_kernel::server::router::site_router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Builds the complete application: page routes, `/assets` static files and
/// request tracing.
pub fn init(state: AppState) -> Router {
    let assets = ServeDir::new(state.config.content.assets_path());

    site_router()
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
