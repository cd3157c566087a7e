//! Static message content for the inbox simulation.
//!
//! This crate houses the authored message pool and a loader for RON data
//! files. Content is consumed by the runtime when a match starts and never
//! appears in persisted state.

mod catalog;

pub use catalog::{LoadError, MessageCatalog, MessageSpec};
