//! Cell text canonicalization.
//!
//! Wiki table cells carry footnote markers, line breaks between inline
//! elements, and non-breaking spaces used for layout. Every piece of text
//! that ends up in a record goes through [`canonicalize`] so downstream
//! consumers see plain single-spaced strings.

use std::sync::LazyLock;

use regex::Regex;

/// Matches one or more whitespace characters, including newlines left over
/// from the markup structure.
#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Canonicalizes extracted cell text.
///
/// Non-breaking spaces (U+00A0) are removed outright, matching the source
/// pages where they pad numeric cells rather than separate words. Remaining
/// whitespace runs collapse to a single space and the result is trimmed.
///
/// The operation is idempotent: canonicalizing an already-canonical string
/// returns it unchanged.
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    let stripped = raw.replace('\u{a0}', "");
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_interior_whitespace_runs() {
        assert_eq!(canonicalize("Rio  de \n\t Janeiro"), "Rio de Janeiro");
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        assert_eq!(canonicalize("  Flamengo \n"), "Flamengo");
    }

    #[test]
    fn removes_non_breaking_spaces_entirely() {
        // NBSP pads numbers on the source pages; it is deleted, not spaced.
        assert_eq!(canonicalize("1\u{a0}958"), "1958");
    }

    #[test]
    fn is_idempotent_on_canonical_input() {
        let once = canonicalize("  S\u{e3}o\u{a0} Paulo  FC ");
        assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn empty_and_whitespace_only_input_yields_empty() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize(" \u{a0} \n "), "");
    }
}
