//! # wiki-roster
//!
//! Extracts a structured roster of football teams and players from
//! interlinked wiki-style HTML pages: one index page listing every team of
//! a championship in a sortable table, and one detail page per team
//! carrying its squad.
//!
//! The crate owns the extraction logic only — locating the right table
//! among a page's many candidates, flattening irregular table structures
//! into uniform records, recovering each team's outbound link, and walking
//! N detail pages while tolerating per-page failures. Page rendering is
//! behind the [`PageFetcher`] trait; bring a browser-driving implementation
//! for script-heavy sites, or enable the `fetch` feature for a plain HTTP
//! one.
//!
//! ## Quick Start
//!
//! ```rust
//! use wiki_roster::{extract_teams, extract_roster, Options};
//!
//! let index_html = r#"<table class="wikitable sortable">
//!     <tr><th>Equipe</th><th>Cidade</th></tr>
//!     <tr><td><a href="/wiki/Flamengo">Flamengo</a></td>
//!         <td>Rio de Janeiro</td></tr>
//! </table>"#;
//!
//! let options = Options::default();
//! let teams = extract_teams(index_html, &options)?;
//! assert_eq!(teams.records.len(), 1);
//! assert_eq!(
//!     teams.links[0].as_deref(),
//!     Some("https://pt.wikipedia.org/wiki/Flamengo"),
//! );
//! # Ok::<(), wiki_roster::Error>(())
//! ```
//!
//! ## Failure model
//!
//! Only the index page can abort a run ([`Error::TableNotFound`] or a fetch
//! failure there). Every per-team problem — unreachable page, missing
//! roster table, malformed rows — degrades that one team's contribution
//! and is logged via `tracing`; sibling teams are unaffected.

mod error;
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Declarative table-location rules.
pub mod locator;

/// Team index table extraction.
pub mod teams;

/// Per-team roster table extraction.
pub mod roster;

/// Page fetching seam and optional HTTP implementation.
pub mod fetch;

/// Multi-page aggregation driver.
pub mod collect;

/// Cell text canonicalization.
pub mod text;

// Public API - re-exports
pub use collect::{collect_players, scrape, ScrapeOutcome};
pub use error::{Error, Result};
pub use fetch::PageFetcher;
#[cfg(feature = "fetch")]
pub use fetch::HttpFetcher;
pub use options::Options;
pub use roster::Player;
pub use teams::{TeamRecord, TeamTable};

/// Extracts team records and detail-page links from index-page HTML.
///
/// Parses the markup and applies the configured index-table rule. Fails
/// with [`Error::TableNotFound`] when no table carries the configured class
/// set — the one extraction failure that is fatal for a whole run.
pub fn extract_teams(html: &str, options: &Options) -> Result<TeamTable> {
    teams::extract_teams(&dom::parse(html), options)
}

/// Extracts all players from team-detail-page HTML.
///
/// Never fails: a page without a recognizable roster table yields an empty
/// list, and a missing info-panel title only leaves the players' `team`
/// field unset.
#[must_use]
pub fn extract_roster(html: &str, options: &Options) -> Vec<Player> {
    roster::extract_roster(&dom::parse(html), options)
}
