//! HTTP API handlers for cooltown-search

pub mod health;
pub mod recognize;

pub use health::health_routes;
pub use recognize::recognize;
