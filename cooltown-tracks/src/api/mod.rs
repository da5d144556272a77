//! HTTP API handlers for cooltown-tracks

pub mod health;
pub mod tracks;

pub use health::health_routes;
pub use tracks::{clear_tracks, delete_track, list_tracks, read_track, store_track};
