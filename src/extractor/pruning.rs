//! Scoring walk.
//!
//! A depth-first pass over `<body>` that removes bylines, unlikely candidates
//! and empty containers, normalizes `<div>`s and records the nodes whose text
//! is scored. [`score_elements`] then propagates paragraph scores to up to
//! three ancestors.

use dom_query::NodeRef;

use crate::dom;
use crate::options::Flags;
use crate::patterns::{BYLINE, MAYBE_CANDIDATES, UNLIKELY_CANDIDATES};
use crate::scoring::{self, DEFAULT_TAGS_TO_SCORE, SCORE_ANCESTOR_DEPTH};

use super::state::ScoreStore;

/// Tags whose presence keeps a `<div>` from being turned into a `<p>`.
pub const DIV_TO_P_ELEMS: &[&str] = &[
    "a", "blockquote", "dl", "div", "img", "ol", "p", "pre", "table", "ul", "select",
];

/// Containers removed when they hold neither text nor anything but `<br>`/`<hr>`.
const EMPTY_CONTAINER_TAGS: &[&str] = &["div", "section", "header", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Marker class of synthesized paragraphs.
pub const STYLED_CLASS: &str = "readability-styled";

/// Outcome of the scoring walk.
pub struct Walk<'a> {
    /// Nodes whose text contributes to ancestor scores, in visit order.
    pub elements_to_score: Vec<NodeRef<'a>>,
    /// First byline found (and removed) during the walk.
    pub byline: Option<String>,
}

/// Walk `body` in document order, pruning and normalizing as it goes.
///
/// The first rule that applies to a node wins: byline, unlikely candidate,
/// empty container, then recording/`<div>` normalization.
#[must_use]
pub fn collect_elements_to_score<'a>(body: &NodeRef<'a>, flags: Flags) -> Walk<'a> {
    let mut elements_to_score = Vec::new();
    let mut byline: Option<String> = None;

    let mut node = Some(*body);
    while let Some(current) = node {
        let Some(tag) = dom::tag_name(&current) else {
            node = dom::next_within(&current, body, false);
            continue;
        };
        let is_body = current.id == body.id;
        let match_string = dom::match_string(&current);

        if !is_body && byline.is_none() && is_byline_node(&current, &match_string) {
            let text = dom::text_of(&current).trim().to_string();
            tracing::debug!(byline = %text, "byline found");
            byline = Some(text);
            node = remove_and_get_next(&current, body);
            continue;
        }

        if flags.strip_unlikelys
            && !is_body
            && tag != "a"
            && UNLIKELY_CANDIDATES.is_match(&match_string)
            && !MAYBE_CANDIDATES.is_match(&match_string)
        {
            tracing::trace!(tag = %tag, class_id = %match_string.trim(), "removing unlikely candidate");
            node = remove_and_get_next(&current, body);
            continue;
        }

        if EMPTY_CONTAINER_TAGS.contains(&tag.as_str()) && is_element_without_content(&current) {
            node = remove_and_get_next(&current, body);
            continue;
        }

        if DEFAULT_TAGS_TO_SCORE.contains(&tag.as_str()) {
            elements_to_score.push(current);
        }

        let mut current = current;
        if tag == "div" {
            if let Some(p) = single_paragraph_child(&current) {
                if let Some(parent) = dom::parent(&current) {
                    dom::replace_child(&parent, &current, &p);
                    current = p;
                    elements_to_score.push(current);
                }
            } else if !has_child_block_element(&current) {
                dom::rename(&current, "p");
                elements_to_score.push(current);
            } else {
                wrap_text_children(&current);
            }
        }

        node = dom::next_within(&current, body, false);
    }

    Walk {
        elements_to_score,
        byline,
    }
}

/// Add each recorded node's score to its ancestors.
///
/// Skips nodes that were detached, are shorter than `min_text_length` or have
/// no ancestor. The ancestor at distance `level` (0 = parent) receives
/// `score / divider(level)`.
pub fn score_elements(
    elements: &[NodeRef],
    body: &NodeRef,
    store: &mut ScoreStore,
    min_text_length: usize,
) {
    for element in elements {
        if !dom::is_within(element, body) {
            continue;
        }

        let text = dom::inner_text(element);
        if text.chars().count() < min_text_length {
            continue;
        }

        let ancestors = dom::ancestors(element, SCORE_ANCESTOR_DEPTH);
        if ancestors.is_empty() {
            continue;
        }

        let score = scoring::paragraph_score(&text);
        for (level, ancestor) in ancestors.iter().enumerate() {
            // the root element is never a candidate
            if dom::parent_element(ancestor).is_none() {
                break;
            }
            store.add_score(ancestor, level, score / scoring::score_divider(level));
        }
    }
}

/// `rel="author"` or a byline-looking class/id, with 1 to 99 characters of text.
fn is_byline_node(node: &NodeRef, match_string: &str) -> bool {
    let rel_author = dom::attr(node, "rel").is_some_and(|r| r.eq_ignore_ascii_case("author"));
    if !rel_author && !BYLINE.is_match(match_string) {
        return false;
    }
    let length = dom::text_of(node).trim().chars().count();
    length > 0 && length < 100
}

/// Empty trimmed text and no element children besides `<br>`/`<hr>`.
fn is_element_without_content(node: &NodeRef) -> bool {
    if !dom::text_of(node).trim().is_empty() {
        return false;
    }
    dom::element_children(node)
        .iter()
        .all(|c| dom::is_any_tag(c, &["br", "hr"]))
}

/// The only element child, when it is a `<p>` and no text sits beside it.
fn single_paragraph_child<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let children = dom::element_children(node);
    if children.len() != 1 || !dom::is_tag(&children[0], "p") {
        return None;
    }
    let has_text = dom::children(node)
        .iter()
        .any(|c| dom::is_text(c) && !dom::is_whitespace_text(c));
    if has_text {
        return None;
    }
    Some(children[0])
}

fn has_child_block_element(node: &NodeRef) -> bool {
    !dom::descendants_by_tags(node, DIV_TO_P_ELEMS).is_empty()
}

/// Wrap every non-blank text child in a `<p class="readability-styled">`.
fn wrap_text_children(node: &NodeRef) {
    for child in dom::children(node) {
        if !dom::is_text(&child) || dom::is_whitespace_text(&child) {
            continue;
        }
        let p = dom::create_element(node, "p");
        dom::set_attr(&p, "class", STYLED_CLASS);
        dom::replace_child(node, &child, &p);
        dom::append_child(&p, &child);
    }
}

fn remove_and_get_next<'a>(node: &NodeRef<'a>, root: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let next = dom::next_within(node, root, true);
    dom::remove(node);
    next
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;
    use dom_query::Document;

    fn walk(doc: &Document, flags: Flags) -> Walk<'_> {
        let body = dom::body(doc).unwrap();
        collect_elements_to_score(&body, flags)
    }

    fn first<'a>(doc: &'a Document, css: &str) -> NodeRef<'a> {
        doc.select(css).nodes().first().copied().unwrap()
    }

    #[test]
    fn test_byline_recorded_and_removed() {
        let doc = Document::from(
            r#"<body><div class="byline">By Jane Doe</div><a rel="author">Second Author</a><p>text</p></body>"#,
        );
        let result = walk(&doc, Flags::default());
        assert_eq!(result.byline.as_deref(), Some("By Jane Doe"));
        assert!(doc.select(".byline").is_empty());
        // first writer wins, the second one stays in the tree
        assert_eq!(doc.select("a[rel=author]").length(), 1);
    }

    #[test]
    fn test_long_byline_ignored() {
        let long = "x".repeat(120);
        let html = format!(r#"<body><div class="author-box"><p>{long}</p></div></body>"#);
        let doc = Document::from(html.as_str());
        let result = walk(&doc, Flags::default());
        assert!(result.byline.is_none());
    }

    #[test]
    fn test_unlikely_removed_unless_maybe() {
        let doc = Document::from(
            r#"<body><nav class="sidebar"><p>links</p></nav><div class="main-sidebar"><p>kept</p><p>kept too</p></div></body>"#,
        );
        walk(&doc, Flags::default());
        assert!(doc.select("nav").is_empty());
        assert_eq!(doc.select(".main-sidebar").length(), 1);
    }

    #[test]
    fn test_unlikely_kept_when_flag_off() {
        let doc = Document::from(r#"<body><nav class="sidebar"><p>links</p></nav></body>"#);
        let flags = Flags {
            strip_unlikelys: false,
            ..Flags::default()
        };
        walk(&doc, flags);
        assert_eq!(doc.select("nav").length(), 1);
    }

    #[test]
    fn test_empty_containers_removed() {
        let doc = Document::from(
            r#"<body><div id="e"><br><hr></div><h2 id="h">  </h2><section id="s"><img src="a.png"></section></body>"#,
        );
        walk(&doc, Flags::default());
        assert!(doc.select("#e").is_empty());
        assert!(doc.select("#h").is_empty());
        // an image is content
        assert_eq!(doc.select("#s").length(), 1);
    }

    #[test]
    fn test_div_with_single_p_is_replaced() {
        let doc = Document::from(r#"<body><div id="d"><p id="p">Only paragraph</p></div></body>"#);
        let result = walk(&doc, Flags::default());
        assert!(doc.select("#d").is_empty());
        assert_eq!(doc.select("body > #p").length(), 1);
        let p = first(&doc, "#p");
        assert!(result.elements_to_score.iter().any(|n| n.id == p.id));
    }

    #[test]
    fn test_div_without_blocks_becomes_p() {
        let doc = Document::from(r#"<body><div id="d">Just <b>inline</b> text</div></body>"#);
        let result = walk(&doc, Flags::default());
        let d = first(&doc, "#d");
        assert_eq!(dom::tag_name(&d).as_deref(), Some("p"));
        assert_eq!(result.elements_to_score.len(), 1);
    }

    #[test]
    fn test_div_text_children_wrapped() {
        let doc = Document::from(r#"<body><div id="d">loose text<p>para</p>  </div></body>"#);
        walk(&doc, Flags::default());
        let styled = doc.select("#d > p.readability-styled");
        assert_eq!(styled.length(), 1);
        assert_eq!(styled.text().to_string(), "loose text");
        assert_eq!(doc.select("#d > p").length(), 2);
    }

    #[test]
    fn test_score_propagation_dividers() {
        // body > div#a > div#b > div#c > p: parent /1, grandparent /2, third /6
        let text = "word ".repeat(30);
        let html = format!(
            r#"<body><div id="a"><div id="b"><div id="c"><p>{text}</p><p>x</p></div></div></div></body>"#
        );
        let doc = Document::from(html.as_str());
        let body = dom::body(&doc).unwrap();
        let result = collect_elements_to_score(&body, Flags::default());
        let mut store = ScoreStore::default();
        score_elements(&result.elements_to_score, &body, &mut store, 25);

        // "word word ..." trimmed is 149 chars: base = 1 + 0 + 1 = 2
        let base = 2.0;
        assert_eq!(store.score(first(&doc, "#c").id), 5.0 + base);
        assert_eq!(store.score(first(&doc, "#b").id), 5.0 + base / 2.0);
        assert_eq!(store.score(first(&doc, "#a").id), 5.0 + base / 6.0);
        assert!(!store.is_initialized(body.id));
    }

    #[test]
    fn test_short_paragraph_not_scored() {
        let doc = Document::from(r#"<body><div id="a"><p>too short</p><p>also short</p></div></body>"#);
        let body = dom::body(&doc).unwrap();
        let result = collect_elements_to_score(&body, Flags::default());
        let mut store = ScoreStore::default();
        score_elements(&result.elements_to_score, &body, &mut store, 25);
        assert!(store.candidates().is_empty());
    }
}
