//! Places API endpoints
//!
//! This module implements the `/api/places` relay. POST forwards the
//! client's `{city, country}` to the external webhook and returns the
//! normalized payload; GET is a scaffold greeting kept for compatibility.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::schemas::{PlacesRequest, PlacesResponse, TravelData};
use crate::server::state::AppState;

/// Response for the GET scaffold endpoint
#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Relay a places query to the upstream webhook.
///
/// POST /api/places
pub async fn relay_places(
    State(state): State<AppState>,
    body: Result<Json<PlacesRequest>, JsonRejection>,
) -> Result<Json<PlacesResponse>, ApiError> {
    // A malformed body follows the same generic error path as upstream
    // failures; the client-facing taxonomy stays binary.
    let Json(request) = body.map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    tracing::info!(
        city = %request.city,
        country = %request.country,
        "Relaying places request"
    );

    let output = state
        .webhook
        .fetch_recommendations(&request.city, &request.country)
        .await?;

    // Summarize what came back. Every section defaults to empty, so any
    // JSON object deserializes; only non-object payloads fall through. The
    // payload itself is passed through untouched either way.
    match serde_json::from_value::<TravelData>(output.clone()) {
        Ok(data) => tracing::debug!(
            places = data.places.len(),
            cuisine = data.local_cuisine.len(),
            tips = data.travel_tips.len(),
            "Upstream payload received"
        ),
        Err(_) => tracing::debug!("Upstream payload is not a JSON object"),
    }

    Ok(Json(PlacesResponse {
        message: "Data received!".to_string(),
        output,
    }))
}

/// Scaffold greeting.
///
/// GET /api/places
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Hello from GET!".to_string(),
    })
}
