//! Page fetching seam.
//!
//! The extractors only consume already-rendered HTML; where that HTML comes
//! from is behind [`PageFetcher`]. Production callers typically wrap a
//! browser-driving fetcher so script-rendered pages arrive complete; the
//! optional [`HttpFetcher`] (cargo feature `fetch`) covers pages whose
//! tables are present in the static markup.

use crate::error::Result;

/// Capability to turn a URL into rendered HTML text.
///
/// Implementations own navigation, waiting for dynamic content, timeouts,
/// and any retry policy. They fail with [`crate::Error::Fetch`]; the driver
/// treats every fetch failure the same way regardless of cause.
pub trait PageFetcher {
    /// Fetch the page at `url` and return its rendered HTML.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher over `reqwest`.
///
/// Retrieves the static markup only; no scripts run. Sufficient for the
/// wiki pages this crate targets, whose tables are server-rendered.
#[cfg(feature = "fetch")]
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    /// Create a fetcher with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "fetch")]
impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|err| crate::error::Error::Fetch {
                url: url.to_string(),
                reason: err.to_string(),
            })
    }
}
