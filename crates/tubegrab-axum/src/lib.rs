//! Axum web adapter for tubegrab.
//!
//! Exposes the download and playlist jobs of [`tubegrab_core::JobService`]
//! over HTTP:
//!
//! - `POST /api/download` streams the downloaded file back as an attachment
//! - `POST /api/playlist` downloads a whole playlist and lists the files
//! - `GET /health` answers `OK`
//!
//! [`bootstrap`] is the composition root wiring the yt-dlp engine into the
//! job service; [`start_server`] binds and serves.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests under tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AppContext, CorsConfig, DEFAULT_HOST, DEFAULT_PORT, ServerConfig, bootstrap,
    bootstrap_with_engine, build_app, start_server,
};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
