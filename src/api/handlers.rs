//! HTTP API handlers.

use std::any::Any;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::DeploymentMode;

/// Application state shared with handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Deployment mode fixed at startup.
    pub mode: DeploymentMode,
}

impl AppState {
    /// Create new app state.
    pub fn new(mode: DeploymentMode) -> Self {
        Self { mode }
    }

    /// Whether error responses carry detail.
    pub fn is_debug(&self) -> bool {
        self.mode.is_debug()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DeploymentMode::Development)
    }
}

/// Greeting response.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Greeting text.
    pub message: &'static str,
    /// Always "success".
    pub status: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Body of every error the application itself produces.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short, stable error label.
    pub error: &'static str,
    /// Human-readable detail, only in debug mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    fn new(error: &'static str, debug: bool, detail: impl FnOnce() -> String) -> Self {
        Self {
            error,
            detail: debug.then(detail),
        }
    }
}

/// Hello handler - always returns 200 with the fixed greeting.
pub async fn hello() -> impl IntoResponse {
    Json(HelloResponse {
        message: "Hello World from Python Backend!",
        status: "success",
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: "Python Flask Backend",
    })
}

/// Fallback for unrouted paths.
pub async fn not_found(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    debug!(%method, %uri, "no route matched");

    let body = ErrorResponse::new("not found", state.is_debug(), || {
        format!("no route for {} {}", method, uri.path())
    });

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Turn a caught handler panic into a 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, debug: bool) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %message, "handler panicked");

    let body = ErrorResponse::new("internal server error", debug, || message);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
