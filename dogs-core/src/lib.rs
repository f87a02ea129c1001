//! Dogs Core - JSON API over dog records
//!
//! This crate provides the HTTP routing layer, the repository contract it
//! delegates to, and the in-memory and MySQL repository implementations.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod openapi;
pub mod repository;
pub mod server;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
