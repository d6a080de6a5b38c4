//! Media fetch engine port.
//!
//! The engine resolves a URL against its supported providers, selects the
//! streams matching the configured format selector, downloads them and,
//! when two streams were selected, merges them into the configured
//! container. Everything it writes lands under the configuration's output
//! template.

use async_trait::async_trait;

use crate::domain::{FetchConfiguration, FetchReport};
use crate::error::FetchEngineError;

/// External media fetch engine.
///
/// Implementations must not block the async runtime: long-running work is
/// expected to happen in a child process or on a blocking thread.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// Extract and download `url` according to `config`.
    ///
    /// Returns one [`FetchResult`](crate::domain::FetchResult) per processed
    /// item, each carrying the filename prepared from the output template
    /// (with the pre-merge extension).
    async fn fetch(
        &self,
        url: &str,
        config: &FetchConfiguration,
    ) -> Result<FetchReport, FetchEngineError>;
}
