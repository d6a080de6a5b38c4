//! Port definitions (trait abstractions) for external systems.
//!
//! # Design Rules
//!
//! - No process or CLI details in any signature
//! - The engine is a black box: URL and configuration in, report out

mod fetch_engine;

pub use fetch_engine::FetchEngine;

#[cfg(test)]
pub use fetch_engine::MockFetchEngine;
