//! HTTP API handlers for cooltown-gateway

pub mod health;
pub mod identify;

pub use health::health_routes;
pub use identify::identify;
