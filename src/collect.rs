//! Multi-page aggregation.
//!
//! Walks the team links discovered on the index page and accumulates every
//! roster into one collection. The central resilience contract lives here:
//! one bad team page is logged and skipped, never allowed to abort the
//! remaining teams.

use tracing::{error, info, warn};

use crate::dom;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::options::Options;
use crate::roster::{self, Player};
use crate::teams::{self, TeamRecord};

/// Everything one scrape run produced.
///
/// Returned as an explicit value rather than accumulated in shared state,
/// so runs can be retried or composed freely.
#[derive(Debug, Clone, Default)]
pub struct ScrapeOutcome {
    /// Team records from the index table, in table order.
    pub teams: Vec<TeamRecord>,

    /// Detail-page link per team, parallel to `teams`.
    pub links: Vec<Option<String>>,

    /// All players across all reachable team pages, in team order then
    /// row order. Teams whose page failed contribute nothing.
    pub players: Vec<Player>,
}

/// Fetch and extract every linked roster, in order.
///
/// `None` links are skipped without a fetch. A fetch failure is isolated to
/// its team: it is logged and the traversal continues. The returned
/// collection is complete for every team that succeeded, regardless of how
/// many failed.
pub fn collect_players<F: PageFetcher>(
    fetcher: &F,
    links: &[Option<String>],
    options: &Options,
) -> Vec<Player> {
    let mut players = Vec::new();
    for link in links {
        let Some(url) = link else {
            continue;
        };
        match fetcher.fetch(url) {
            Ok(html) => {
                let page_players = roster::extract_roster(&dom::parse(&html), options);
                if page_players.is_empty() {
                    warn!(%url, "no roster found on team page");
                } else {
                    info!(%url, count = page_players.len(), "extracted players");
                }
                players.extend(page_players);
            }
            Err(err) => {
                error!(%url, %err, "skipping team page");
            }
        }
    }
    players
}

/// End-to-end scrape: index page to full player collection.
///
/// Only the index page can fail the run; with no team table there is
/// nothing downstream to do. Per-team failures afterwards degrade the
/// result instead of aborting it, so the outcome is either a total failure
/// or a partial-to-complete success.
pub fn scrape<F: PageFetcher>(
    fetcher: &F,
    index_url: &str,
    options: &Options,
) -> Result<ScrapeOutcome> {
    info!(url = %index_url, "fetching team index");
    let html = fetcher.fetch(index_url)?;
    let table = teams::extract_teams(&dom::parse(&html), options)?;
    info!(teams = table.records.len(), "extracted team index");

    let players = collect_players(fetcher, &table.links, options);
    Ok(ScrapeOutcome {
        teams: table.records,
        links: table.links,
        players,
    })
}
