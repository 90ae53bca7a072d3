use wiki_roster::{extract_teams, Error, Options};

#[test]
fn extract_teams_returns_one_record_and_one_link_per_row() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th>Equipe</th><th>Cidade</th><th>Capacidade</th></tr>
            <tr><td><a href="/wiki/Flamengo">Flamengo</a></td>
                <td>Rio de Janeiro</td><td>78&#160;838</td></tr>
            <tr><td>Botafogo</td><td>Rio de Janeiro</td><td>44&#160;661</td></tr>
            <tr><td><a href="/wiki/Santos">Santos</a></td>
                <td>Santos</td><td>16&#160;068</td></tr>
        </table>
    "#;

    let result = extract_teams(html, &Options::default());
    match result {
        Ok(teams) => {
            assert_eq!(teams.records.len(), 3);
            assert_eq!(teams.links.len(), teams.records.len());

            // Row order preserved
            assert_eq!(teams.records[0].get("Equipe").map(String::as_str), Some("Flamengo"));
            assert_eq!(teams.records[1].get("Equipe").map(String::as_str), Some("Botafogo"));
            assert_eq!(teams.records[2].get("Equipe").map(String::as_str), Some("Santos"));

            // Anchor-less row yields the absence-marker at the same index,
            // never a dropped slot.
            assert_eq!(
                teams.links[0].as_deref(),
                Some("https://pt.wikipedia.org/wiki/Flamengo")
            );
            assert_eq!(teams.links[1], None);
            assert_eq!(
                teams.links[2].as_deref(),
                Some("https://pt.wikipedia.org/wiki/Santos")
            );
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn key_set_is_identical_across_all_records() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th>Equipe</th><th>Cidade</th></tr>
            <tr><td>A</td><td>X</td></tr>
            <tr><td>B</td><td>Y</td></tr>
        </table>
    "#;

    let teams = extract_teams(html, &Options::default()).unwrap();
    for record in &teams.records {
        let mut keys: Vec<_> = record.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["Cidade", "Equipe"]);
    }
}

#[test]
fn missing_index_table_is_fatal() {
    let html = r#"<table class="wikitable"><tr><th>Equipe</th></tr></table>"#;

    let result = extract_teams(html, &Options::default());
    match result {
        Err(Error::TableNotFound(rule)) => assert_eq!(rule, "wikitable sortable"),
        other => panic!("expected Err(TableNotFound), got {other:?}"),
    }
}

#[test]
fn cell_text_is_canonicalized() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th> Equipe </th><th>Capacidade</th></tr>
            <tr><td>Gr&#234;mio</td><td> 55&#160;225
                </td></tr>
        </table>
    "#;

    let teams = extract_teams(html, &Options::default()).unwrap();
    // Headers trimmed; NBSP deleted outright, interior whitespace collapsed.
    assert_eq!(
        teams.records[0].get("Capacidade").map(String::as_str),
        Some("55225")
    );
}

// Documented source limitation, flagged here rather than "fixed": rows are
// zipped to the shorter of (headers, cells), silently dropping the surplus.
#[test]
fn rows_longer_or_shorter_than_header_are_truncated_not_padded() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th>Equipe</th><th>Cidade</th></tr>
            <tr><td>Longa</td><td>Cidade</td><td>extra ignorado</td></tr>
            <tr><td>Curta</td></tr>
        </table>
    "#;

    let teams = extract_teams(html, &Options::default()).unwrap();
    assert_eq!(teams.records.len(), 2);
    assert_eq!(teams.records[0].len(), 2);
    assert_eq!(teams.records[1].len(), 1);
    assert_eq!(teams.records[1].get("Equipe").map(String::as_str), Some("Curta"));
    assert_eq!(teams.records[1].get("Cidade"), None);
}

// Accepted source limitation: a repeated header name keeps the last
// column's value when rows are folded into a map.
#[test]
fn duplicate_header_names_keep_the_last_value() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th>Equipe</th><th>Nota</th><th>Nota</th></tr>
            <tr><td>A</td><td>primeira</td><td>segunda</td></tr>
        </table>
    "#;

    let teams = extract_teams(html, &Options::default()).unwrap();
    assert_eq!(teams.records[0].len(), 2);
    assert_eq!(teams.records[0].get("Nota").map(String::as_str), Some("segunda"));
}

#[test]
fn rows_without_data_cells_are_skipped_entirely() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th>Equipe</th></tr>
            <tr><th>sub-header only</th></tr>
            <tr><td><a href="/wiki/A">A</a></td></tr>
        </table>
    "#;

    let teams = extract_teams(html, &Options::default()).unwrap();
    assert_eq!(teams.records.len(), 1);
    assert_eq!(teams.links.len(), 1);
    assert_eq!(teams.links[0].as_deref(), Some("https://pt.wikipedia.org/wiki/A"));
}

#[test]
fn first_matching_table_wins_over_later_candidates() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th>Equipe</th></tr>
            <tr><td>Primeiro</td></tr>
        </table>
        <table class="wikitable sortable">
            <tr><th>Equipe</th></tr>
            <tr><td>Segundo</td></tr>
        </table>
    "#;

    let teams = extract_teams(html, &Options::default()).unwrap();
    assert_eq!(teams.records.len(), 1);
    assert_eq!(teams.records[0].get("Equipe").map(String::as_str), Some("Primeiro"));
}

#[test]
fn site_origin_is_configurable() {
    let html = r#"
        <table class="wikitable sortable">
            <tr><th>Team</th></tr>
            <tr><td><a href="/wiki/Arsenal_F.C.">Arsenal</a></td></tr>
        </table>
    "#;

    let options = Options {
        site_origin: "https://en.wikipedia.org".to_string(),
        ..Options::default()
    };
    let teams = extract_teams(html, &options).unwrap();
    assert_eq!(
        teams.links[0].as_deref(),
        Some("https://en.wikipedia.org/wiki/Arsenal_F.C.")
    );
}
