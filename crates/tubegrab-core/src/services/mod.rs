//! Job services.
//!
//! The validator, configuration builder and output resolver are pure
//! functions; [`JobService`] wires them to a workspace manager and a
//! [`FetchEngine`](crate::ports::FetchEngine) for both download flows.

mod config_builder;
mod job_service;
mod resolver;
mod validator;

pub use config_builder::{build_configuration, build_playlist_configuration};
pub use job_service::{DEFAULT_FETCH_TIMEOUT, JobService};
pub use resolver::{resolve_output, resolve_output_path};
pub use validator::{MISSING_URL_MESSAGE, validate_download, validate_playlist};
