//! Travel API schemas
//!
//! Owned request/response types for the relay endpoint, plus the upstream
//! travel-data contract. The upstream shape is documented here and used for
//! logging and tests; the relay path itself passes the payload through
//! without validating it (the webhook owns that contract, not us).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/places`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacesRequest {
    pub city: String,
    pub country: String,
}

/// Successful relay response: the normalized upstream payload under `output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub message: String,
    pub output: Value,
}

/// A recommended place, as produced by the upstream workflow.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Place {
    pub name: String,
    pub description: String,
    pub category: String,
    pub recommended_time: String,
    pub entry_fee: String,
    pub tips: String,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
}

/// A local dish recommendation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Cuisine {
    pub dish: String,
    pub description: String,
    pub recommended_place: String,
}

/// The upstream travel payload. Every section defaults to empty so a
/// differently-shaped response still deserializes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TravelData {
    pub places: Vec<Place>,
    pub local_cuisine: Vec<Cuisine>,
    pub travel_tips: Vec<String>,
}
