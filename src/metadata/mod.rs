//! Metadata extraction module.
//!
//! Title, byline and excerpt come from the whole document and are derived
//! before the body is rewritten, so the cleaner can compare headings against
//! the title.
//!
//! - `title`: title derivation from `<title>` and the page headings
//! - `meta_tags`: author, description and title from `<meta>` tags

pub mod meta_tags;
pub mod title;

use dom_query::Document;

use crate::result::ArticleMetadata;

pub use meta_tags::{examine_meta, MetaTags};
pub use title::{article_title, word_count};

/// Extract title, byline and excerpt from `doc`.
///
/// An Open Graph or Twitter card title overrides the derived one. `dir` is
/// left unset; it depends on the selected content.
#[must_use]
pub fn extract_metadata(doc: &Document) -> ArticleMetadata {
    let meta = examine_meta(doc);
    let title = meta.title.unwrap_or_else(|| article_title(doc));

    tracing::debug!(title = %title, byline = ?meta.author, "metadata extracted");

    ArticleMetadata {
        title,
        byline: meta.author,
        excerpt: meta.description,
        dir: None,
    }
}
