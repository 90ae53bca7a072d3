//! Error types for wiki-roster.
//!
//! Two condition kinds with distinct severities: a fetch failure and a
//! missing required table. Callers match on the variant to decide whether a
//! failure aborts the run (index page) or is isolated to one team page.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page could not be retrieved or rendered.
    #[error("failed to fetch page {url}: {reason}")]
    Fetch {
        /// URL that failed to load.
        url: String,
        /// Fetcher-reported cause.
        reason: String,
    },

    /// A table required by the extraction rule is absent from the page.
    #[error("no table matching '{0}' found in page")]
    TableNotFound(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
