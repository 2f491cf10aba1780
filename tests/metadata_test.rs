//! Metadata fields and their serialized form.

#![allow(clippy::unwrap_used)]

use rs_readscrub::{extract_html, ArticleMetadata, Options};

const BASE: &str = "https://example.com/story";

const PARAGRAPH: &str = "The orchard survived the late frost, and growers say the apple harvest \
                         should be larger than last year, with early varieties ready by August. ";

fn page(head: &str) -> String {
    format!(
        r#"<html dir="ltr"><head>{head}</head><body><div><p>{p}</p><p>{p}</p></div></body></html>"#,
        p = PARAGRAPH.repeat(3)
    )
}

#[test]
fn test_meta_description_priority() {
    let head = r#"<title>Orchard Survives the Frost</title>
        <meta name="twitter:description" content="Twitter text">
        <meta property="og:description" content="Open Graph text">"#;
    let article = extract_html(&page(head), BASE, &Options::default()).unwrap();
    assert_eq!(article.metadata.excerpt.as_deref(), Some("Open Graph text"));
}

#[test]
fn test_excerpt_from_first_paragraph() {
    let article = extract_html(&page("<title>Orchard Survives the Frost</title>"), BASE, &Options::default()).unwrap();
    let excerpt = article.metadata.excerpt.unwrap();
    assert!(excerpt.starts_with("The orchard survived the late frost"));
}

#[test]
fn test_author_meta() {
    let head = r#"<meta name="author" content="Sam Carter">"#;
    let article = extract_html(&page(head), BASE, &Options::default()).unwrap();
    assert_eq!(article.metadata.byline.as_deref(), Some("Sam Carter"));
    assert_eq!(article.metadata.dir.as_deref(), Some("ltr"));
}

#[test]
fn test_metadata_serializes_to_json() {
    let head = r#"<title>Orchard Survives the Frost</title><meta name="author" content="Sam Carter">
        <meta name="description" content="Growers expect a big harvest.">"#;
    let article = extract_html(&page(head), BASE, &Options::default()).unwrap();

    let json = serde_json::to_value(&article.metadata).unwrap();
    assert_eq!(json["title"], "Orchard Survives the Frost");
    assert_eq!(json["byline"], "Sam Carter");
    assert_eq!(json["excerpt"], "Growers expect a big harvest.");
    assert_eq!(json["dir"], "ltr");

    let back: ArticleMetadata = serde_json::from_value(json).unwrap();
    assert_eq!(back, article.metadata);
}

#[test]
fn test_missing_fields_serialize_as_null() {
    let json = serde_json::to_string(&ArticleMetadata::default()).unwrap();
    assert_eq!(json, r#"{"title":"","byline":null,"excerpt":null,"dir":null}"#);
}
