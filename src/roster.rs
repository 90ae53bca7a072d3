//! Roster table extraction.
//!
//! Team pages lay their squad out in a `toccolours` table that packs
//! several players per row: each player occupies three consecutive cells
//! (shirt number, position, name). The table shares its class with other
//! boxes on the page, so it is identified by marker substrings instead.

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document};
use crate::locator::{self, TableRule};
use crate::options::Options;

/// Number of consecutive cells one player occupies in a roster row.
const CELLS_PER_PLAYER: usize = 3;

/// Header and sub-header rows preceding the first player row.
const HEADER_ROWS: usize = 2;

/// One squad member extracted from a team's roster table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Shirt number as printed; may be empty for unnumbered entries.
    pub shirt_number: String,

    /// Position code (e.g. "GOL", "ATA").
    pub position: String,

    /// Player name.
    pub name: String,

    /// Team name from the page's info panel, `None` when the panel or its
    /// title element could not be located.
    pub team: Option<String>,
}

/// Extract all players from a team's detail page.
///
/// A page without a recognizable roster table contributes an empty list,
/// not an error; the multi-page traversal stays resilient to unusual
/// layouts. A missing info-panel title only costs the `team` field.
#[must_use]
pub fn extract_roster(doc: &Document, options: &Options) -> Vec<Player> {
    let team = team_name(doc, options);

    let rule = TableRule::MarkerText {
        class: &options.roster_table_class,
        markers: &options.roster_markers,
    };
    let Some(table) = locator::locate(doc, &rule) else {
        return Vec::new();
    };

    let mut players = Vec::new();
    for row in dom::rows(&table).iter().skip(HEADER_ROWS) {
        let cells: Vec<String> = dom::data_cells(row).iter().map(dom::text).collect();
        // Trailing group with fewer than three cells is dropped whole.
        for group in cells.chunks_exact(CELLS_PER_PLAYER) {
            players.push(Player {
                shirt_number: group[0].clone(),
                position: group[1].clone(),
                name: group[2].clone(),
                team: team.clone(),
            });
        }
    }
    players
}

/// Resolve the team's name from the page's info panel.
///
/// Looks up the panel table by class, then the title element by class
/// within it. Either lookup failing yields `None`; a missing title must not
/// abort roster extraction.
fn team_name(doc: &Document, options: &Options) -> Option<String> {
    let panel = dom::first_by_classes(doc, "table", &options.info_panel_classes)?;
    let title = dom::first_within(&panel, &options.team_title_classes)?;
    let name = dom::text(&title);
    if name.is_empty() { None } else { Some(name) }
}
