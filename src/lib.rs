//! # rs-readscrub
//!
//! Readability-style main content extraction.
//!
//! Given a parsed HTML document, this library finds the element holding the
//! article, removes navigation, ads, comments and other boilerplate around
//! and inside it, and derives the title, byline, excerpt and text direction.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readscrub::{extract_html, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main content here, long enough to count as a paragraph.</p></article></body></html>"#;
//!
//! let article = extract_html(html, "https://example.com/my-article", &Options::default())?;
//! println!("Title: {}", article.metadata.title);
//! println!("Content: {}", article.text_content);
//! # Ok::<(), rs_readscrub::Error>(())
//! ```
//!
//! ## Stages
//!
//! - **Preprocessing**: styles dropped, `<br>` runs turned into paragraphs
//! - **Scoring**: boilerplate pruned, paragraph scores propagated to ancestors
//! - **Selection**: top candidate ranked, promoted, and joined by its siblings
//! - **Cleaning**: forms, widgets, embeds and link lists removed from the content
//! - **Post-processing**: links resolved against the base URI, classes dropped

mod error;
mod extract;
mod options;
mod result;

/// Compiled regex patterns for class/id and text classification.
pub mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Document preparation before scoring.
pub mod html_processing;

/// Content scoring primitives (class weight, paragraph score, divider).
pub mod scoring;

/// Link density of an element's text.
pub mod link_density;

/// Top candidate selection and sibling inclusion.
pub mod selector;

/// Main content extraction stages (walk, cleaning, pipeline).
pub mod extractor;

/// Metadata extraction (title, meta tags).
pub mod metadata;

/// URL utilities for base URI parsing and resolution.
pub mod url_utils;

/// Quick check whether a document looks like an article.
pub mod readerable;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::{Flags, Options};
pub use readerable::{is_probably_readerable, ReaderableOptions};
pub use result::{Article, ArticleMetadata};
pub use url::Url;

/// Extracts the article from an already parsed document.
///
/// The document is rewritten in place; pass a copy when the original is still
/// needed. The returned [`Article`] borrows nothing from it.
///
/// # Example
///
/// ```rust
/// use rs_readscrub::{extract, Document, Options, Url};
///
/// let doc = Document::from("<html><body><div><p>Some text.</p></div></body></html>");
/// let base = Url::parse("https://example.com/")?;
/// let article = extract(&doc, &base, &Options::default())?;
/// println!("success: {}", article.success);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] when the document has more elements than
/// `options.max_elements_to_parse`. The document is not modified in that case.
pub fn extract(doc: &Document, base_uri: &Url, options: &Options) -> Result<Article> {
    extract::extract_document(doc, base_uri, options)
}

/// Parses `html` and extracts its article.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `base_uri` is not an absolute URL, and
/// [`Error::InputTooLarge`] as [`extract`] does.
pub fn extract_html(html: &str, base_uri: &str, options: &Options) -> Result<Article> {
    let base = url_utils::parse_base_uri(base_uri)?;
    let doc = dom::parse(html);
    extract::extract_document(&doc, &base, options)
}
