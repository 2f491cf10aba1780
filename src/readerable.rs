//! Quick "is this an article" check.
//!
//! A cheap look at a document, without rewriting it, that tells whether a
//! full extraction is likely to find an article.

use std::collections::HashSet;

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::patterns::{MAYBE_CANDIDATES, UNLIKELY_CANDIDATES};

/// Thresholds for [`is_probably_readerable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReaderableOptions {
    /// Text shorter than this does not count at all.
    ///
    /// Default: `140`
    pub min_content_length: usize,

    /// Score the document must exceed.
    ///
    /// Default: `20.0`
    pub min_score: f64,
}

impl Default for ReaderableOptions {
    fn default() -> Self {
        Self {
            min_content_length: 140,
            min_score: 20.0,
        }
    }
}

/// Whether `doc` probably holds an article.
///
/// Visible `<p>`, `<pre>`, `<article>` and `<div>`s with a direct `<br>` child
/// each add `sqrt(length - min_content_length)` once their trimmed text
/// reaches `min_content_length`. Unlikely candidates and paragraphs inside
/// list items are skipped.
#[must_use]
pub fn is_probably_readerable(doc: &Document, options: &ReaderableOptions) -> bool {
    let mut seen = HashSet::new();
    let mut nodes: Vec<NodeRef> = Vec::new();
    for tag in ["p", "pre", "article"] {
        nodes.extend(dom::all_by_tag(doc, tag));
    }
    for br in dom::all_by_tag(doc, "br") {
        if let Some(div) = dom::parent_element(&br).filter(|p| dom::is_tag(p, "div")) {
            nodes.push(div);
        }
    }

    let mut score = 0.0;
    for node in nodes {
        if !seen.insert(node.id) || !is_visible(&node) {
            continue;
        }
        let match_string = dom::match_string(&node);
        if UNLIKELY_CANDIDATES.is_match(&match_string) && !MAYBE_CANDIDATES.is_match(&match_string) {
            continue;
        }
        if dom::is_tag(&node, "p") && dom::has_ancestor_tag(&node, "li", 0, |_| true) {
            continue;
        }

        let length = dom::text_of(&node).trim().chars().count();
        if length < options.min_content_length {
            continue;
        }
        score += ((length - options.min_content_length) as f64).sqrt();
        if score > options.min_score {
            tracing::trace!(score, "document looks readerable");
            return true;
        }
    }
    false
}

/// Not hidden by `display: none`, the `hidden` attribute or `aria-hidden`.
fn is_visible(node: &NodeRef) -> bool {
    let display_none = dom::attr(node, "style").is_some_and(|style| {
        style
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .any(|(prop, value)| {
                prop.trim().eq_ignore_ascii_case("display") && value.trim().eq_ignore_ascii_case("none")
            })
    });
    let aria_hidden = dom::attr(node, "aria-hidden").is_some_and(|v| v.trim() == "true");
    !display_none && !aria_hidden && !dom::has_attr(node, "hidden")
}
