//! Minimal JSON backend with hello and health endpoints.
//!
//! ```text
//! GET /api/hello   -> {"message": "Hello World from Python Backend!", "status": "success"}
//! GET /api/health  -> {"status": "healthy", "service": "Python Flask Backend"}
//! ```
//!
//! Every response allows cross-origin access from any origin.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers and router
//! - [`server`]: Listener and serve loop
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use config::{Config, DeploymentMode};
pub use error::{Result, ServerError};
