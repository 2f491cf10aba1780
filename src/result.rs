//! Result types for extraction output.
//!
//! [`Article`] carries the extracted content as serialized markup together
//! with its text, and [`ArticleMetadata`] the document-level fields.

use dom_query::Document;
use serde::{Deserialize, Serialize};

/// Metadata derived from the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Derived article title. Empty when the document has none.
    pub title: String,

    /// Author attribution. The `author` meta tag wins over a byline found in
    /// the body.
    pub byline: Option<String>,

    /// Short description: meta description, Open Graph or Twitter card
    /// description, else the first paragraph of the content.
    pub excerpt: Option<String>,

    /// Text direction (`ltr`/`rtl`) declared near the content.
    pub dir: Option<String>,
}

/// Result of extracting one document.
#[derive(Debug, Clone, Default)]
pub struct Article {
    /// `false` when no usable content node was found.
    pub success: bool,

    /// Serialized content root: a `<div id="readability-content">` holding
    /// the `<div id="readability-page-1" class="page">` wrapper.
    pub content: Option<String>,

    /// Text of the content root.
    pub text_content: String,

    /// Length of `text_content` in characters.
    pub length: usize,

    pub metadata: ArticleMetadata,
}

impl Article {
    /// An unsuccessful result that still carries the document metadata.
    #[must_use]
    pub fn failed(metadata: ArticleMetadata) -> Self {
        Self {
            success: false,
            content: None,
            text_content: String::new(),
            length: 0,
            metadata,
        }
    }

    /// Parse the content back into a document the caller owns.
    ///
    /// The fragment is parsed as HTML, so it gains the usual `html`/`body`
    /// wrappers; select `#readability-content` to reach the content root.
    #[must_use]
    pub fn content_document(&self) -> Option<Document> {
        self.content.as_deref().map(Document::from)
    }
}
