use super::{handlers, state::AppState};
use crate::handlers::uploads::MAX_UPLOAD_BYTES;
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/guidelines", get(handlers::guidelines_list))
        .route("/guidelines", post(handlers::guidelines_create))
        .route("/guidelines/{id}", put(handlers::guideline_update))
        .route("/guidelines/{id}", delete(handlers::guideline_delete))
        .route("/uploads", get(handlers::uploads_list))
        .route(
            "/uploads/file",
            post(handlers::upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024)),
        )
        .route("/uploads/{id}", get(handlers::upload_detail))
        .route("/uploads/{id}", delete(handlers::upload_delete))
        .route(
            "/scrape/linkedin",
            get(handlers::linkedin_latest).post(handlers::linkedin_scrape_handler),
        )
        .route(
            "/scrape/trustpilot",
            get(handlers::trustpilot_latest).post(handlers::trustpilot_scrape_handler),
        )
        .route(
            "/scrape/website",
            get(handlers::website_latest).post(handlers::website_scrape_handler),
        )
        .route("/search", post(handlers::search_handler))
        .route("/generate", post(handlers::generate_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
