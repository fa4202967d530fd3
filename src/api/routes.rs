//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health, hello, not_found, panic_response, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/api/hello", get(hello))
        .route("/api/health", get(health));

    with_layers(routes, state)
}

/// Permissive CORS: any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Fallback, panic handling, tracing and CORS around `routes`.
///
/// CORS is outermost so that 404, 405 and 500 responses carry it too.
fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
    let debug = state.is_debug();

    routes
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn std::any::Any + Send + 'static>| panic_response(panic, debug),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
