//! Error handling

mod types;

pub use types::ApiError;
