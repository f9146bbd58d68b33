//! Request and response schemas

pub mod travel;

pub use travel::{Cuisine, Place, PlacesRequest, PlacesResponse, TravelData};
