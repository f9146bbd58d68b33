//! Travel Scout library
//!
//! A small travel-discovery web app: static form/results pages served over
//! a webhook relay that forwards queries to an external workflow service.

// Public modules
pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod schemas;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use error::ApiError;
pub use server::App;
