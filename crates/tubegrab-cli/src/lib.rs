//! Command line front end for tubegrab.
//!
//! `tubegrab serve` (also the default when no subcommand is given) runs the
//! HTTP service; `tubegrab check` verifies that yt-dlp is usable.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
