//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the domain expects from the outside:
//! the visual surface a routine is played against, and the remote log
//! store. They contain no implementation details.

pub mod control;
pub mod highlight;
pub mod log_store;

pub use control::{ControlAppearance, DetachedControl, TriggerControl};
pub use highlight::{HighlightError, HighlightPort, NoopHighlighter};
pub use log_store::{LogStore, LogStoreError};
