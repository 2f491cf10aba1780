//! Article title derivation.
//!
//! Starts from the `<title>` text and strips site names attached with a
//! separator or a colon, or substitutes the first `<h1>` for titles that are
//! implausibly short or long. A result of four words or fewer falls back to
//! the original `<title>` when it came from the `<h1>` or from an
//! over-eager hierarchical strip.

use dom_query::Document;

use crate::dom;
use crate::patterns::{
    TITLE_HIERARCHICAL_SEPARATOR, TITLE_LEADING_SEGMENT, TITLE_SEPARATOR,
    TITLE_SEPARATOR_RUN, TITLE_TRAILING_SEGMENT, WORD_BREAK,
};

/// Titles outside this character range are replaced by the first `<h1>`.
const MIN_TITLE_CHARS: usize = 15;
const MAX_TITLE_CHARS: usize = 150;

/// Derive the article title from `<title>` and the page headings.
#[must_use]
pub fn article_title(doc: &Document) -> String {
    let original = dom::first_by_tag(doc, "title")
        .map(|t| dom::text_of(&t).trim().to_string())
        .unwrap_or_default();

    let mut title = original.clone();
    let mut hierarchical = false;
    let mut from_heading = false;

    if TITLE_SEPARATOR.is_match(&original) {
        hierarchical = TITLE_HIERARCHICAL_SEPARATOR.is_match(&original);
        title = TITLE_TRAILING_SEGMENT.replace(&original, "$1").into_owned();
        if word_count(&title) < 3 {
            title = TITLE_LEADING_SEGMENT.replace(&original, "$1").into_owned();
        }
    } else if original.contains(": ") {
        if !heading_equals(doc, &original) {
            title = strip_colon_prefix(&original);
        }
    } else {
        let length = original.chars().count();
        if !(MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&length) {
            if let Some(h1) = dom::first_by_tag(doc, "h1") {
                title = dom::text_of(&h1).to_string();
                from_heading = true;
            }
        }
    }

    let title = title.trim();
    let words = word_count(title);
    // Short results revert when they came from the <h1>, or when a
    // hierarchical separator was stripped and more than the site name went
    // with it.
    let over_stripped = hierarchical
        && words + 1 != word_count(&TITLE_SEPARATOR_RUN.replace_all(&original, ""));
    if words <= 4 && (from_heading || over_stripped) {
        tracing::trace!(title = %original, "keeping original title");
        return original;
    }
    title.to_string()
}

/// Pieces of `text` between whitespace runs, counting empty edge pieces.
#[must_use]
pub fn word_count(text: &str) -> usize {
    WORD_BREAK.split(text).count()
}

fn heading_equals(doc: &Document, title: &str) -> bool {
    dom::all_by_tag(doc, "h1")
        .iter()
        .chain(dom::all_by_tag(doc, "h2").iter())
        .any(|h| dom::text_of(h).trim() == title)
}

/// Text after the last colon, after the first one when that is too short, or
/// the whole title when more than five words precede the first colon.
fn strip_colon_prefix(original: &str) -> String {
    let (Some(first), Some(last)) = (original.find(':'), original.rfind(':')) else {
        return original.to_string();
    };
    let after_last = &original[last + 1..];
    if word_count(after_last) < 3 {
        return original[first + 1..].to_string();
    }
    if word_count(&original[..first]) > 5 {
        return original.to_string();
    }
    after_last.to_string()
}
