//! HTTP server

pub mod app;
pub mod routes;
pub mod state;

pub use app::App;
pub use state::AppState;
