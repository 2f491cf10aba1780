//! Content extraction pipeline.
//!
//! [`grab_article`] runs the body-level stages in order: the scoring walk,
//! score propagation, candidate selection, sibling inclusion and cleaning.
//! [`post_process`] then makes the content stand on its own: links are
//! resolved against the base URI and internal class names are dropped.

use std::collections::HashSet;

use dom_query::{Document, NodeRef};
use url::Url;

use crate::dom;
use crate::options::Options;
use crate::selector::{gather_siblings, select_top_candidate};
use crate::url_utils::{is_javascript_uri, to_absolute_uri};

use super::cleaning::prep_article;
use super::pruning::{collect_elements_to_score, score_elements, STYLED_CLASS};
use super::state::ScoreStore;

/// Id and class of the page wrapper inside the content container.
pub const PAGE_ID: &str = "readability-page-1";
pub const PAGE_CLASS: &str = "page";

/// Elements whose `src` is resolved against the base URI.
const MEDIA_TAGS: &[&str] = &["img", "picture", "figure", "video", "audio", "source"];

/// How far above the top candidate's parent `dir` is looked up.
const DIR_ANCESTOR_DEPTH: usize = 3;

/// Output of [`grab_article`].
pub struct Grabbed<'a> {
    /// The detached `<div id="readability-content">`.
    pub content: NodeRef<'a>,
    /// First byline found during the scoring walk.
    pub byline: Option<String>,
    /// Text direction declared around the top candidate.
    pub dir: Option<String>,
}

/// Run the extraction stages over the body of `doc`.
///
/// `title` is the derived article title. Returns `None` when the document has
/// no `<body>`.
pub fn grab_article<'a>(doc: &'a Document, options: &Options, title: &str) -> Option<Grabbed<'a>> {
    let body = dom::body(doc)?;
    let flags = options.flags();

    let walk = collect_elements_to_score(&body, flags);
    tracing::debug!(
        elements = walk.elements_to_score.len(),
        byline = walk.byline.is_some(),
        "scoring walk finished"
    );

    let mut store = ScoreStore::new(flags);
    score_elements(
        &walk.elements_to_score,
        &body,
        &mut store,
        options.paragraph_char_threshold,
    );

    let top = select_top_candidate(&body, &mut store, options.n_top_candidates);
    let dir = text_direction(&top.node);

    let content = gather_siblings(&top, &store);
    let keep = top.fabricated.then_some(top.node.id);
    prep_article(&content, &mut store, title, keep);

    if top.fabricated {
        dom::set_attr(&top.node, "id", PAGE_ID);
        dom::set_attr(&top.node, "class", PAGE_CLASS);
    } else {
        let page = dom::create_element(&content, "div");
        dom::set_attr(&page, "id", PAGE_ID);
        dom::set_attr(&page, "class", PAGE_CLASS);
        dom::move_children(&content, &page);
        dom::append_child(&content, &page);
    }

    Some(Grabbed {
        content,
        byline: walk.byline,
        dir,
    })
}

/// First non-empty `dir` on the top candidate's parent, the top candidate
/// itself, then the parent's nearest ancestors.
fn text_direction(top: &NodeRef) -> Option<String> {
    let parent = dom::parent_element(top);
    let mut nodes: Vec<NodeRef> = parent.into_iter().collect();
    nodes.push(*top);
    if let Some(parent) = parent {
        nodes.extend(dom::ancestors(&parent, DIR_ANCESTOR_DEPTH));
    }
    nodes
        .iter()
        .filter_map(|n| dom::attr(n, "dir"))
        .map(|d| d.trim().to_string())
        .find(|d| !d.is_empty())
}

/// Resolve links and drop internal class names from the content.
pub fn post_process(content: &NodeRef, base: &Url, options: &Options) {
    fix_relative_uris(content, base);
    if !options.keep_classes {
        let preserved: HashSet<&str> = [PAGE_CLASS, STYLED_CLASS]
            .into_iter()
            .chain(options.classes_to_preserve.iter().map(String::as_str))
            .collect();
        clean_classes(content, &preserved);
    }
}

/// Resolve `href` on links and `src` on media against `base`.
///
/// `javascript:` links are replaced by their text.
pub fn fix_relative_uris(content: &NodeRef, base: &Url) {
    for link in dom::descendants_by_tag(content, "a") {
        let Some(href) = dom::attr(&link, "href") else {
            continue;
        };
        if is_javascript_uri(&href) {
            let text = dom::create_text(&link, &dom::text_of(&link));
            if let Some(parent) = dom::parent(&link) {
                dom::replace_child(&parent, &link, &text);
            }
        } else {
            dom::set_attr(&link, "href", &to_absolute_uri(&href, base));
        }
    }

    for media in dom::descendants_by_tags(content, MEDIA_TAGS) {
        if let Some(src) = dom::attr(&media, "src") {
            dom::set_attr(&media, "src", &to_absolute_uri(&src, base));
        }
    }
}

/// Keep only `preserved` classes on `root` and every element below it.
pub fn clean_classes(root: &NodeRef, preserved: &HashSet<&str>) {
    let mut node = Some(*root);
    while let Some(current) = node {
        if dom::has_attr(&current, "class") {
            let kept: Vec<String> = dom::class_list(&current)
                .into_iter()
                .filter(|c| preserved.contains(c.as_str()))
                .collect();
            if kept.is_empty() {
                dom::remove_attr(&current, "class");
            } else {
                dom::set_attr(&current, "class", &kept.join(" "));
            }
        }
        node = dom::next_within(&current, root, false);
    }
}
