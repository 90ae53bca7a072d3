//! Configuration for roster extraction.
//!
//! The defaults target the Portuguese-language Wikipedia championship pages
//! the crate was written for. Every matching rule is carried here rather
//! than hard-coded in the extractors, so a different wiki (or a drifted page
//! layout) only needs a different `Options` value.

/// Configuration options for roster extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard Wikipedia settings.
///
/// # Example
///
/// ```rust
/// use wiki_roster::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     site_origin: "https://en.wikipedia.org".to_string(),
///     roster_markers: vec!["No.".to_string(), "Pos.".to_string()],
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Origin used to resolve relative team links to absolute URLs.
    ///
    /// Default: `https://pt.wikipedia.org`
    pub site_origin: String,

    /// Class tokens the index (team list) table must all carry.
    ///
    /// Default: `["wikitable", "sortable"]`
    pub index_table_classes: Vec<String>,

    /// Class token shared by roster-table candidates on a team page.
    ///
    /// Several visually similar tables carry this class; the marker scan
    /// below picks the right one.
    ///
    /// Default: `"toccolours"`
    pub roster_table_class: String,

    /// Substrings that must all appear in the roster table's text.
    ///
    /// Default: `["N.º", "Pos."]` (shirt-number and position column
    /// headings on pt.wikipedia.org)
    pub roster_markers: Vec<String>,

    /// Class tokens of the info panel holding the team's identity.
    ///
    /// Default: `["infobox", "vcard", "vevent"]`
    pub info_panel_classes: Vec<String>,

    /// Class tokens of the title element inside the info panel.
    ///
    /// Default: `["fn", "summary"]`
    pub team_title_classes: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            site_origin: "https://pt.wikipedia.org".to_string(),
            index_table_classes: vec!["wikitable".to_string(), "sortable".to_string()],
            roster_table_class: "toccolours".to_string(),
            roster_markers: vec!["N.º".to_string(), "Pos.".to_string()],
            info_panel_classes: vec![
                "infobox".to_string(),
                "vcard".to_string(),
                "vevent".to_string(),
            ],
            team_title_classes: vec!["fn".to_string(), "summary".to_string()],
        }
    }
}
