//! Team table extraction.
//!
//! The index page lists every team of the championship in one sortable
//! table. The header row defines the field names; each data row becomes a
//! record keyed by those names, plus one link entry recovered from the first
//! cell's anchor. Records and links stay positionally parallel: a row with
//! no anchor contributes `None`, never a dropped slot.

use std::collections::HashMap;

use url::Url;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::locator::{self, TableRule};
use crate::options::Options;

/// One team row, keyed by the index table's header texts.
///
/// Duplicate header names are not corrected; when zipped into the map the
/// last column under a repeated name wins.
pub type TeamRecord = HashMap<String, String>;

/// Teams extracted from the index table together with their detail links.
///
/// `links.len() == records.len()` always; entry `i` of `links` belongs to
/// entry `i` of `records`.
#[derive(Debug, Clone, Default)]
pub struct TeamTable {
    /// One record per data row, in table order.
    pub records: Vec<TeamRecord>,
    /// Absolute detail-page URL per row, `None` where the first cell has no
    /// anchor.
    pub links: Vec<Option<String>>,
}

/// Extract team records and detail links from an index page.
///
/// Fails with [`Error::TableNotFound`] when no table carries the configured
/// class set; with no teams nothing downstream can proceed, so this is the
/// one extraction failure that aborts a run.
pub fn extract_teams(doc: &Document, options: &Options) -> Result<TeamTable> {
    let rule = TableRule::ClassSet(&options.index_table_classes);
    let table = locator::locate(doc, &rule)
        .ok_or_else(|| Error::TableNotFound(options.index_table_classes.join(" ")))?;

    let rows = dom::rows(&table);
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Ok(TeamTable::default());
    };

    let headers: Vec<String> = dom::header_cells(header_row)
        .iter()
        .map(dom::text)
        .collect();

    let origin = Url::parse(&options.site_origin).ok();

    let mut records = Vec::new();
    let mut links = Vec::new();
    for row in data_rows {
        let cells = dom::data_cells(row);
        if cells.is_empty() {
            continue;
        }

        links.push(row_link(&cells[0], origin.as_ref()));

        // Zip to the shorter side: surplus headers or cells are dropped,
        // never padded.
        let record: TeamRecord = headers
            .iter()
            .zip(cells.iter())
            .map(|(header, cell)| (header.clone(), dom::text(cell)))
            .collect();
        records.push(record);
    }

    Ok(TeamTable { records, links })
}

/// Resolve the first cell's anchor to an absolute URL.
///
/// A cell with no anchor, an anchor with no href, or an href the origin
/// cannot absorb all yield `None`; an unusable link is an absence, not an
/// empty string.
fn row_link(first_cell: &Selection<'_>, origin: Option<&Url>) -> Option<String> {
    let anchor = dom::first_anchor(first_cell)?;
    let href = dom::attr(&anchor, "href")?;
    let origin = origin?;
    origin.join(&href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_link_resolves_relative_href_against_origin() {
        let doc = dom::parse(r#"<td><a href="/wiki/Flamengo">Flamengo</a></td>"#);
        let cell = doc.select("td");
        let origin = Url::parse("https://pt.wikipedia.org").ok();
        assert_eq!(
            row_link(&cell, origin.as_ref()),
            Some("https://pt.wikipedia.org/wiki/Flamengo".to_string())
        );
    }

    #[test]
    fn row_link_without_anchor_is_none() {
        let doc = dom::parse("<td>Flamengo</td>");
        let cell = doc.select("td");
        let origin = Url::parse("https://pt.wikipedia.org").ok();
        assert_eq!(row_link(&cell, origin.as_ref()), None);
    }

    #[test]
    fn row_link_keeps_already_absolute_href() {
        let doc = dom::parse(r#"<td><a href="https://example.org/t">T</a></td>"#);
        let cell = doc.select("td");
        let origin = Url::parse("https://pt.wikipedia.org").ok();
        assert_eq!(
            row_link(&cell, origin.as_ref()),
            Some("https://example.org/t".to_string())
        );
    }
}
