//! Sibling inclusion.
//!
//! Content often spans several siblings of the top candidate (a lead
//! paragraph next to the main `<div>`, a second column). Siblings that score
//! well enough, or read like prose, are moved into the content container
//! along with the top candidate.

use dom_query::NodeRef;

use crate::dom;
use crate::extractor::state::ScoreStore;
use crate::link_density::link_density;
use crate::patterns::SENTENCE_TAIL;

use super::TopCandidate;

/// Id of the container the included nodes are moved into.
pub const CONTENT_ID: &str = "readability-content";

/// Accepted siblings keep their tag only when it is one of these.
const KEEP_TAG_ON_INCLUSION: &[&str] = &["div", "article", "section", "p"];

/// Minimum sibling score, before scaling by the top score.
const SIBLING_SCORE_FLOOR: f64 = 10.0;

/// Share of the top score used as threshold and same-class bonus.
const SIBLING_SCORE_RATIO: f64 = 0.2;

const LONG_PARAGRAPH_CHARS: usize = 80;

/// Build the content container from the top candidate and its siblings.
///
/// Included nodes move into a new `<div id="readability-content">` in document
/// order; the container is detached from the document.
pub fn gather_siblings<'a>(top: &TopCandidate<'a>, store: &ScoreStore) -> NodeRef<'a> {
    let top_node = top.node;
    let article = dom::create_element(&top_node, "div");
    dom::set_attr(&article, "id", CONTENT_ID);

    let Some(parent) = dom::parent_element(&top_node) else {
        dom::append_child(&article, &top_node);
        return article;
    };

    let top_score = store.score(top_node.id);
    let threshold = SIBLING_SCORE_FLOOR.max(top_score * SIBLING_SCORE_RATIO);
    let top_class = dom::attr(&top_node, "class").unwrap_or_default();

    for sibling in dom::element_children(&parent) {
        let include = sibling.id == top_node.id
            || is_scored_sibling(&sibling, store, top_score, threshold, &top_class)
            || is_prose_paragraph(&sibling);
        if !include {
            continue;
        }

        if sibling.id != top_node.id {
            tracing::trace!(
                tag = %dom::tag_name(&sibling).unwrap_or_default(),
                score = store.score(sibling.id),
                "including sibling"
            );
        }
        if !dom::is_any_tag(&sibling, KEEP_TAG_ON_INCLUSION) {
            dom::rename(&sibling, "div");
        }
        dom::append_child(&article, &sibling);
    }

    article
}

/// Initialized sibling whose score, plus the same-class bonus, exceeds the
/// threshold.
fn is_scored_sibling(
    sibling: &NodeRef,
    store: &ScoreStore,
    top_score: f64,
    threshold: f64,
    top_class: &str,
) -> bool {
    if !store.is_initialized(sibling.id) {
        return false;
    }
    let mut bonus = 0.0;
    if !top_class.is_empty() && dom::attr(sibling, "class").as_deref() == Some(top_class) {
        bonus = top_score * SIBLING_SCORE_RATIO;
    }
    store.score(sibling.id) + bonus > threshold
}

/// A `<p>` that is long with few links, or short, link-free and sentence-like.
fn is_prose_paragraph(sibling: &NodeRef) -> bool {
    if !dom::is_tag(sibling, "p") {
        return false;
    }
    let density = link_density(sibling);
    let text = dom::inner_text(sibling);
    let length = text.chars().count();

    if length > LONG_PARAGRAPH_CHARS {
        density < 0.25
    } else {
        length > 0 && density == 0.0 && SENTENCE_TAIL.is_match(&text)
    }
}
