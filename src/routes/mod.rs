//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One endpoint: screen delivery. The client renderer fetches a layout tree
//! by identifier and interprets it generically, so the server surface stays
//! this small on purpose.

pub mod screens;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/screen/{id}", get(screens::get_screen))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
