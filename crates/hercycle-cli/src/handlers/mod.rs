//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Validate CLI-specific input
//! 2. Call into the core, voice, and API crates
//! 3. Format output for the terminal

pub mod list;
pub mod log;
pub mod play;
pub mod show;
pub mod voices;
