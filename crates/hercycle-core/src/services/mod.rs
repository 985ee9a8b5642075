//! Application services built on the domain rules and ports.

pub mod log_service;

pub use log_service::{LogService, LogServiceError};
