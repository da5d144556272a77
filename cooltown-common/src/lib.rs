//! # Cooltown Common Library
//!
//! Shared code for the three Cooltown services:
//! - Error type for configuration and bootstrap
//! - TOML configuration loading
//! - Tracing initialization
//! - Wire types exchanged between services
//! - Track id path escaping
//! - Health response

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod track_key;

pub use error::{Error, Result};
