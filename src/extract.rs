//! Core content extraction algorithm.
//!
//! Runs the stages over one parsed document and assembles the [`Article`].

use url::Url;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::extractor::pipeline;
use crate::html_processing;
use crate::metadata;
use crate::options::Options;
use crate::result::Article;

/// Extract the article from `doc`, rewriting it in place.
pub(crate) fn extract_document(doc: &Document, base: &Url, options: &Options) -> Result<Article> {
    check_size(doc, options.max_elements_to_parse)?;

    html_processing::prep_document(doc);
    let mut metadata = metadata::extract_metadata(doc);

    let Some(grabbed) = pipeline::grab_article(doc, options, &metadata.title) else {
        tracing::debug!("document has no body");
        return Ok(Article::failed(metadata));
    };
    pipeline::post_process(&grabbed.content, base, options);

    metadata.dir = grabbed.dir;
    if metadata.byline.is_none() {
        metadata.byline = grabbed.byline;
    }

    let text_content = dom::text_of(&grabbed.content).to_string();
    if text_content.trim().is_empty() {
        tracing::debug!("no content left after cleaning");
        return Ok(Article::failed(metadata));
    }

    if metadata.excerpt.is_none() {
        metadata.excerpt = dom::descendants_by_tag(&grabbed.content, "p")
            .first()
            .map(|p| dom::text_of(p).trim().to_string())
            .filter(|text| !text.is_empty());
    }

    let length = text_content.chars().count();
    tracing::debug!(length, title = %metadata.title, "article extracted");

    Ok(Article {
        success: true,
        content: Some(dom::outer_html(&grabbed.content).to_string()),
        text_content,
        length,
        metadata,
    })
}

/// Fail before any mutation when the document exceeds `max` elements.
fn check_size(doc: &Document, max: usize) -> Result<()> {
    if max == 0 {
        return Ok(());
    }
    let found = dom::count_elements(doc);
    if found > max {
        tracing::debug!(found, max, "document too large");
        return Err(Error::InputTooLarge { found, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const PROSE: &str = "The committee met on Tuesday, and after a long debate, it agreed to fund the \
                         new library, the park renovation and the bus route, starting next spring.";

    fn base() -> Url {
        Url::parse("https://example.com/articles/one").unwrap()
    }

    #[test]
    fn test_size_guard_leaves_document_untouched() {
        let doc = Document::from("<html><body><style>p{}</style><p>a</p><p>b</p></body></html>");
        let options = Options {
            max_elements_to_parse: 3,
            ..Options::default()
        };
        match extract_document(&doc, &base(), &options) {
            Err(Error::InputTooLarge { found, max }) => {
                assert!(found > 3);
                assert_eq!(max, 3);
            }
            _ => panic!("expected InputTooLarge"),
        }
        assert_eq!(doc.select("style").length(), 1);
    }

    #[test]
    fn test_excerpt_falls_back_to_first_paragraph() {
        let html = format!("<html><body><div><p>{PROSE}</p><p>{PROSE}</p></div></body></html>");
        let doc = Document::from(html.as_str());
        let article = extract_document(&doc, &base(), &Options::default()).unwrap();
        assert!(article.success);
        assert_eq!(article.metadata.excerpt.as_deref(), Some(PROSE));
    }

    #[test]
    fn test_meta_author_beats_body_byline() {
        let html = format!(
            r#"<html><head><meta name="author" content="Meta Author"></head>
            <body><div><span class="byline">By Body Author</span><p>{PROSE}</p><p>{PROSE}</p></div></body></html>"#
        );
        let doc = Document::from(html.as_str());
        let article = extract_document(&doc, &base(), &Options::default()).unwrap();
        assert_eq!(article.metadata.byline.as_deref(), Some("Meta Author"));
    }

    #[test]
    fn test_body_byline_used_without_meta() {
        let html = format!(
            r#"<html><body><div><span class="byline">By Body Author</span><p>{PROSE}</p><p>{PROSE}</p></div></body></html>"#
        );
        let doc = Document::from(html.as_str());
        let article = extract_document(&doc, &base(), &Options::default()).unwrap();
        assert_eq!(article.metadata.byline.as_deref(), Some("By Body Author"));
        assert!(!article.text_content.contains("By Body Author"));
    }

    #[test]
    fn test_empty_document_fails_softly() {
        let doc = Document::from("<html><body></body></html>");
        let article = extract_document(&doc, &base(), &Options::default()).unwrap();
        assert!(!article.success);
        assert!(article.content.is_none());
        assert_eq!(article.length, 0);
    }
}
