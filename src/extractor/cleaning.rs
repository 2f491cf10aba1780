//! Conditional cleaning of the selected content.
//!
//! [`prep_article`] runs once over the assembled content container. It strips
//! presentational markup, protects data tables, then removes embeds, widgets,
//! form controls and low-value blocks.

use dom_query::{NodeId, NodeRef};

use crate::dom;
use crate::link_density::link_density;
use crate::options::Flags;
use crate::patterns::{SHARE_ELEMENTS, VIDEOS};
use crate::scoring::{self, CLASS_WEIGHT};

use super::pruning::STYLED_CLASS;
use super::state::ScoreStore;
use super::tables::mark_data_tables;

/// Attributes dropped from every element without the styled marker class.
const PRESENTATIONAL_ATTRIBUTES: &[&str] = &[
    "align", "background", "bgcolor", "border", "cellpadding", "cellspacing", "frame",
    "hspace", "rules", "style", "valign", "vspace",
];

/// Elements that also lose `width` and `height`.
const DEPRECATED_SIZE_ATTRIBUTE_ELEMS: &[&str] = &["table", "th", "td", "hr", "pre"];

const EMBED_TAGS: &[&str] = &["object", "embed", "iframe"];

/// Share widgets at least this long are left in place.
const SHARE_ELEMENT_THRESHOLD: usize = 500;

/// Prepare the content container for output.
///
/// `title` is the derived article title, used to drop an `<h2>` repeating it.
/// `keep` names a container exempt from conditional cleaning, the wrapper
/// fabricated around body's children when no candidate was found.
pub fn prep_article(
    content: &NodeRef,
    store: &mut ScoreStore,
    title: &str,
    keep: Option<NodeId>,
) {
    let flags = store.flags();

    clean_styles(content);
    mark_data_tables(content, store);

    clean_conditionally(content, "form", store, flags, keep);
    clean_conditionally(content, "fieldset", store, flags, keep);

    for tag in ["object", "embed", "h1", "footer", "link", "aside"] {
        clean(content, tag);
    }

    for block in dom::element_children(content) {
        clean_matched_nodes(&block, |node, match_string| {
            SHARE_ELEMENTS.is_match(match_string)
                && dom::text_of(node).chars().count() < SHARE_ELEMENT_THRESHOLD
        });
    }

    remove_title_duplicate_h2(content, title);

    for tag in ["iframe", "input", "textarea", "select", "button"] {
        clean(content, tag);
    }

    clean_headers(content, flags);

    clean_conditionally(content, "table", store, flags, keep);
    clean_conditionally(content, "ul", store, flags, keep);
    clean_conditionally(content, "div", store, flags, keep);

    for p in dom::descendants_by_tag(content, "p").into_iter().rev() {
        let media = dom::descendants_by_tags(&p, &["img", "embed", "object", "iframe"]).len();
        if media == 0 && dom::inner_text(&p).is_empty() {
            dom::remove(&p);
        }
    }

    for br in dom::descendants_by_tag(content, "br") {
        let next = dom::next_element(br.next_sibling());
        if next.is_some_and(|n| dom::is_tag(&n, "p")) {
            dom::remove(&br);
        }
    }
}

/// Strip presentational attributes, without entering `<svg>`.
pub fn clean_styles(root: &NodeRef) {
    let mut current = Some(*root);
    while let Some(node) = current {
        let Some(tag) = dom::tag_name(&node) else {
            current = dom::next_within(&node, root, false);
            continue;
        };
        if tag == "svg" {
            current = dom::next_within(&node, root, true);
            continue;
        }

        if !dom::class_list(&node).iter().any(|c| c == STYLED_CLASS) {
            for name in PRESENTATIONAL_ATTRIBUTES {
                dom::remove_attr(&node, name);
            }
        }
        if DEPRECATED_SIZE_ATTRIBUTE_ELEMS.contains(&tag.as_str()) {
            dom::remove_attr(&node, "width");
            dom::remove_attr(&node, "height");
        }

        current = dom::next_within(&node, root, false);
    }
}

/// Remove every `tag` element under `root`, except embeds pointing at a
/// known video host.
pub fn clean(root: &NodeRef, tag: &str) {
    let is_embed = EMBED_TAGS.contains(&tag);
    for node in dom::descendants_by_tag(root, tag).into_iter().rev() {
        if is_embed && is_video_embed(&node) {
            continue;
        }
        dom::remove(&node);
    }
}

/// An attribute value or the inner markup references a video host.
fn is_video_embed(node: &NodeRef) -> bool {
    dom::attributes(node)
        .iter()
        .any(|(_, value)| VIDEOS.is_match(value))
        || VIDEOS.is_match(&dom::inner_html(node))
}

/// Remove descendants of `root` for which `filter(node, "<class> <id>")`
/// holds. `root` itself is never removed.
fn clean_matched_nodes<F>(root: &NodeRef, filter: F)
where
    F: Fn(&NodeRef, &str) -> bool,
{
    let mut next = dom::next_within(root, root, false);
    while let Some(node) = next {
        if !dom::is_element(&node) {
            next = dom::next_within(&node, root, false);
            continue;
        }
        if filter(&node, &dom::match_string(&node)) {
            let after = dom::next_within(&node, root, true);
            tracing::trace!(class_id = %dom::match_string(&node).trim(), "removing share element");
            dom::remove(&node);
            next = after;
        } else {
            next = dom::next_within(&node, root, false);
        }
    }
}

/// Drop the single `<h2>` when it repeats the title.
fn remove_title_duplicate_h2(root: &NodeRef, title: &str) {
    let h2s = dom::descendants_by_tag(root, "h2");
    let [h2] = h2s.as_slice() else {
        return;
    };
    let title_len = title.chars().count();
    if title_len == 0 {
        return;
    }

    let heading = dom::text_of(h2).to_string();
    let heading_len = heading.chars().count();
    let similar_rate = (heading_len as f64 - title_len as f64) / title_len as f64;
    if similar_rate.abs() >= 0.5 {
        return;
    }

    let titles_match = if similar_rate > 0.0 {
        heading.contains(title)
    } else {
        title.contains(heading.as_str())
    };
    if titles_match {
        tracing::trace!("removing h2 repeating the title");
        dom::remove(h2);
    }
}

/// Remove `<h1>`/`<h2>` with a negative class weight.
fn clean_headers(root: &NodeRef, flags: Flags) {
    for heading in dom::descendants_by_tags(root, &["h1", "h2"]).into_iter().rev() {
        if scoring::class_weight(&heading, flags) < 0.0 {
            dom::remove(&heading);
        }
    }
}

/// Heuristic removal of `tag` elements that look like boilerplate.
///
/// Runs only when `clean_conditionally` is on. Data tables, everything inside
/// one, and the `keep` node are kept.
pub fn clean_conditionally(
    root: &NodeRef,
    tag: &str,
    store: &ScoreStore,
    flags: Flags,
    keep: Option<NodeId>,
) {
    if !flags.clean_conditionally {
        return;
    }
    let is_list = matches!(tag, "ul" | "ol");

    for node in dom::descendants_by_tag(root, tag).into_iter().rev() {
        if Some(node.id) == keep || !dom::is_within(&node, root) {
            continue;
        }
        if store.is_data_table(node.id)
            || dom::has_ancestor_tag(&node, "table", 0, |t| store.is_data_table(t.id))
        {
            continue;
        }
        if let Some(reason) = removal_reason(&node, is_list, flags) {
            tracing::trace!(tag, reason, "conditionally removing");
            dom::remove(&node);
        }
    }
}

/// Why `node` should go, or `None` to keep it.
fn removal_reason(node: &NodeRef, is_list: bool, flags: Flags) -> Option<&'static str> {
    let weight = scoring::class_weight(node, flags);
    if weight < 0.0 {
        return Some("negative weight");
    }

    let text = dom::inner_text(node);
    if scoring::comma_count(&text) >= 10 {
        return None;
    }

    let paragraphs = dom::descendants_by_tag(node, "p").len();
    let images = dom::descendants_by_tag(node, "img").len();
    let list_items = dom::descendants_by_tag(node, "li").len();
    let inputs = dom::descendants_by_tag(node, "input").len();
    let embeds = dom::descendants_by_tags(node, EMBED_TAGS)
        .iter()
        .filter(|e| !is_video_embed(e))
        .count();
    let density = link_density(node);
    let content_length = text.chars().count();
    let in_figure = dom::has_ancestor_tag(node, "figure", 3, |_| true);

    if images > 1 && (paragraphs as f64 / images as f64) < 0.5 && !in_figure {
        return Some("image heavy");
    }
    if !is_list && list_items > paragraphs {
        return Some("more list items than paragraphs");
    }
    if inputs > paragraphs / 3 {
        return Some("form controls");
    }
    if !is_list && content_length < 25 && (images == 0 || images > 2) && !in_figure {
        return Some("too short");
    }
    if !is_list && weight < CLASS_WEIGHT && density > 0.2 {
        return Some("link heavy");
    }
    if weight >= CLASS_WEIGHT && density > 0.5 {
        return Some("link heavy despite positive weight");
    }
    if (embeds == 1 && content_length < 75) || embeds > 1 {
        return Some("embeds");
    }
    None
}
