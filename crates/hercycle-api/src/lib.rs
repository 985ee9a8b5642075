#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultLogClient, SheetLogClient};

// HTTP backend
pub use http::{HttpBackend, ReqwestBackend};

// Configuration
pub use config::LogApiConfig;

// Errors
pub use error::{ApiError, ApiResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
