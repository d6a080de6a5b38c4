//! Domain types shared by every tubegrab adapter.

mod artifact;
mod config;
mod request;

pub use artifact::{
    DeliveredArtifact, FetchReport, FetchResult, PLAYLIST_SUCCESS_MESSAGE, PlaylistListing,
    ResolvedArtifact,
};
pub use config::{FetchConfiguration, OUTPUT_TEMPLATE};
pub use request::{DEFAULT_QUALITY_HINT, DownloadJobRequest, MediaKind};
