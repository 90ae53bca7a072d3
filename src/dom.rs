//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate exposing the handful of primitives
//! the extractors need: parse, class-based lookup, canonical text, and raw
//! attribute access. Extraction code never touches `dom_query` directly, so
//! the matching strategy (or the parser itself) can change behind this
//! surface.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

use crate::text;

/// Parse HTML text into a navigable document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Build a CSS selector from a tag name and a set of required class tokens.
///
/// An empty tag matches any element (`.fn.summary`); otherwise the element
/// must carry every listed class (`table.wikitable.sortable`).
#[must_use]
pub fn class_selector(tag: &str, classes: &[String]) -> String {
    let mut selector = String::from(tag);
    for class in classes {
        selector.push('.');
        selector.push_str(class);
    }
    selector
}

/// Find the first element matching a tag and class-token set.
///
/// Later matches are ignored; a page with several qualifying elements still
/// yields only the first in document order.
#[must_use]
pub fn first_by_classes<'a>(
    doc: &'a Document,
    tag: &str,
    classes: &[String],
) -> Option<Selection<'a>> {
    let sel = doc.select(&class_selector(tag, classes));
    sel.nodes().first().map(|node| Selection::from(*node))
}

/// Find all elements matching a tag and a single class token, in document
/// order, each as its own selection.
#[must_use]
pub fn all_by_class<'a>(doc: &'a Document, tag: &str, class: &str) -> Vec<Selection<'a>> {
    let sel = doc.select(&format!("{tag}.{class}"));
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// Find the first descendant of `root` carrying every listed class token.
#[must_use]
pub fn first_within<'a>(root: &Selection<'a>, classes: &[String]) -> Option<Selection<'a>> {
    let sel = root.select(&class_selector("", classes));
    sel.nodes().first().map(|node| Selection::from(*node))
}

/// All `<tr>` descendants of a table, in document order.
#[must_use]
pub fn rows<'a>(table: &Selection<'a>) -> Vec<Selection<'a>> {
    let sel = table.select("tr");
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// All `<td>` data cells of a row, in document order. Header cells (`<th>`)
/// are deliberately excluded; the extractors treat them separately.
#[must_use]
pub fn data_cells<'a>(row: &Selection<'a>) -> Vec<Selection<'a>> {
    let sel = row.select("td");
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// All `<th>` header cells of a row, in document order.
#[must_use]
pub fn header_cells<'a>(row: &Selection<'a>) -> Vec<Selection<'a>> {
    let sel = row.select("th");
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// First `<a>` descendant of an element, if any.
#[must_use]
pub fn first_anchor<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    let anchors = sel.select("a");
    anchors.nodes().first().map(|node| Selection::from(*node))
}

/// Full text content of the node and its descendants, uncanonicalized.
#[inline]
#[must_use]
pub fn raw_text(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content canonicalized per [`crate::text::canonicalize`].
#[inline]
#[must_use]
pub fn text(sel: &Selection) -> String {
    text::canonicalize(&sel.text())
}

/// Attribute value, if present.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|value| value.to_string())
}
