//! Outbound integrations for cooltown-search

pub mod audd_client;

pub use audd_client::{RecognitionClient, RecognitionConfig, RecognitionError};
