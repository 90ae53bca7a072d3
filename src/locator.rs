//! Table location rules.
//!
//! Encyclopedia pages carry many tables: navboxes, medal tables, season
//! summaries. The extractors describe the one they want with a declarative
//! [`TableRule`] and [`locate`] scans the page for it. Absence is reported
//! as `None`, never as an error; the caller decides how severe a missing
//! table is.

use crate::dom::{self, Document, Selection};

/// Declarative rule identifying one table among a page's candidates.
#[derive(Debug, Clone)]
pub enum TableRule<'a> {
    /// First table whose class attribute carries every listed token.
    ///
    /// First match wins; later qualifying tables are ignored.
    ClassSet(&'a [String]),

    /// Scan tables sharing one class token; pick the first whose full text
    /// contains *all* marker substrings.
    ///
    /// Used when no unique class or id distinguishes the target from its
    /// visually similar siblings.
    MarkerText {
        /// Class token shared by the candidate tables.
        class: &'a str,
        /// Substrings that must all appear in the table text.
        markers: &'a [String],
    },
}

/// Find the first table on the page satisfying `rule`.
///
/// Returns `None` when no table qualifies rather than guessing.
#[must_use]
pub fn locate<'d>(doc: &'d Document, rule: &TableRule<'_>) -> Option<Selection<'d>> {
    match rule {
        TableRule::ClassSet(classes) => dom::first_by_classes(doc, "table", classes),
        TableRule::MarkerText { class, markers } => {
            dom::all_by_class(doc, "table", class)
                .into_iter()
                .find(|table| {
                    let table_text = dom::raw_text(table);
                    markers.iter().all(|marker| table_text.contains(marker.as_str()))
                })
        }
    }
}
