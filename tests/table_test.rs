//! Data tables survive cleaning, layout tables do not.

#![allow(clippy::unwrap_used)]

use rs_readscrub::{extract_html, Options};

const BASE: &str = "https://example.com/results";

const SENTENCE: &str = "The season ended with a close race, and the final standings below show \
                        how narrow the margins were for the top clubs this year. ";

fn page(tables: &str) -> String {
    format!(
        r#"<html><body><div id="article"><p>{p}</p>{tables}<p>{p}</p></div></body></html>"#,
        p = SENTENCE.repeat(3)
    )
}

fn rows(n: usize, cols: usize) -> String {
    let row = format!("<tr>{}</tr>", "<td>7</td>".repeat(cols));
    row.repeat(n)
}

#[test]
fn test_summary_table_kept() {
    let html = page(r#"<table summary="standings"><tr><td>Rovers 42</td></tr></table>"#);
    let article = extract_html(&html, BASE, &Options::default()).unwrap();
    assert!(article.text_content.contains("Rovers 42"));
}

#[test]
fn test_presentation_table_removed_despite_size() {
    let html = page(&format!(r#"<table role="presentation">{}</table>"#, rows(20, 1)));
    let article = extract_html(&html, BASE, &Options::default()).unwrap();
    assert!(!article.content.unwrap().contains("<table"));
}

#[test]
fn test_large_table_kept_by_size() {
    let html = page(&format!("<table>{}</table>", rows(10, 2)));
    let article = extract_html(&html, BASE, &Options::default()).unwrap();
    assert!(article.content.unwrap().contains("<table"));
}

#[test]
fn test_small_layout_table_removed() {
    let html = page(r#"<table><tr><td><a href="/nav">Navigation</a></td></tr></table>"#);
    let article = extract_html(&html, BASE, &Options::default()).unwrap();
    let content = article.content.unwrap();
    assert!(!content.contains("<table"));
    assert!(!content.contains("Navigation"));
}

#[test]
fn test_header_table_with_short_cells_kept() {
    let html = page("<table><thead><tr><th>Club</th><th>Pts</th></tr></thead><tr><td>A</td><td>1</td></tr></table>");
    let article = extract_html(&html, BASE, &Options::default()).unwrap();
    assert!(article.text_content.contains("Club"));
}
