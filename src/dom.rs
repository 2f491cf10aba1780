//! DOM Operations Adapter
//!
//! Thin facade over the `dom_query` arena. Nodes are addressed through
//! [`NodeRef`] handles (a `NodeId` plus the owning tree), so parent links are
//! arena lookups and never owning references.
//!
//! Every structural mutation the engine performs goes through this module.

use crate::patterns::{NORMALIZE, WHITESPACE};

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Tag/Node Information ===

/// Lowercase tag name, `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether `node` is an element with the given lowercase tag.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t == tag)
}

/// Whether `node` is an element whose tag is one of `tags`.
#[inline]
#[must_use]
pub fn is_any_tag(node: &NodeRef, tags: &[&str]) -> bool {
    tag_name(node).is_some_and(|t| tags.contains(&t.as_str()))
}

#[inline]
#[must_use]
pub fn is_element(node: &NodeRef) -> bool {
    node.is_element()
}

#[inline]
#[must_use]
pub fn is_text(node: &NodeRef) -> bool {
    node.is_text()
}

/// Text node made only of whitespace.
#[must_use]
pub fn is_whitespace_text(node: &NodeRef) -> bool {
    node.is_text() && WHITESPACE.is_match(&node.text())
}

// === Attribute Operations ===

#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

#[inline]
#[must_use]
pub fn has_attr(node: &NodeRef, name: &str) -> bool {
    node.has_attr(name)
}

#[inline]
pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    node.set_attr(name, value);
}

#[inline]
pub fn remove_attr(node: &NodeRef, name: &str) {
    node.remove_attr(name);
}

/// All attributes as name/value pairs, in document order.
#[must_use]
pub fn attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// The `class` attribute split on whitespace.
#[must_use]
pub fn class_list(node: &NodeRef) -> Vec<String> {
    attr(node, "class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// `"<class> <id>"`, the string every class/id heuristic is matched against.
#[must_use]
pub fn match_string(node: &NodeRef) -> String {
    let class = attr(node, "class").unwrap_or_default();
    let id = attr(node, "id").unwrap_or_default();
    format!("{class} {id}")
}

// === Text Content ===

/// Recursive concatenation of descendant text.
#[inline]
#[must_use]
pub fn text_of(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Trimmed text with whitespace runs collapsed to one space.
#[must_use]
pub fn inner_text(node: &NodeRef) -> String {
    let text = node.text();
    NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

/// Character count of [`inner_text`].
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    inner_text(node).chars().count()
}

#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}

#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    node.inner_html()
}

// === Tree Navigation ===

/// Handle for `id` in the tree that owns `ctx`.
#[inline]
#[must_use]
pub fn node_ref<'a>(ctx: &NodeRef<'a>, id: NodeId) -> NodeRef<'a> {
    NodeRef::new(id, ctx.tree)
}

#[inline]
#[must_use]
pub fn parent<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent()
}

/// Parent if it is an element (the document node is not).
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// All child nodes, text included, as a snapshot.
#[inline]
#[must_use]
pub fn children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
}

/// Element children only, as a snapshot.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Next sibling that is an element or non-whitespace text, starting at `node`.
///
/// Returns `node` itself when it already qualifies.
#[must_use]
pub fn next_element<'a>(node: Option<NodeRef<'a>>) -> Option<NodeRef<'a>> {
    let mut current = node;
    while let Some(n) = current {
        if n.is_element() || !is_whitespace_text(&n) {
            return Some(n);
        }
        current = n.next_sibling();
    }
    None
}

/// Descendants of `root` (excluding `root`) in document order.
///
/// `tag` of `"*"` matches every element. The result is a snapshot, so callers
/// may remove nodes while iterating.
#[must_use]
pub fn descendants_by_tag<'a>(root: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    descendants_by_tags(root, &[tag])
}

/// [`descendants_by_tag`] for several tags at once, still in document order.
#[must_use]
pub fn descendants_by_tags<'a>(root: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    let any = tags.contains(&"*");
    let mut out = Vec::new();
    let mut current = root.first_child();
    while let Some(n) = current {
        if let Some(tag) = tag_name(&n) {
            if any || tags.contains(&tag.as_str()) {
                out.push(n);
            }
        }
        current = next_within(&n, root, false);
    }
    out
}

/// Depth-first pre-order successor of `node`.
///
/// With `skip_children` the subtree of `node` is not entered. Reads the tree
/// as it is at call time, so it stays valid while a walk removes nodes.
/// Returns `None` at the end of the document.
#[must_use]
pub fn next_node<'a>(node: &NodeRef<'a>, skip_children: bool) -> Option<NodeRef<'a>> {
    if !skip_children {
        if let Some(first) = node.first_child() {
            return Some(first);
        }
    }
    if let Some(sibling) = node.next_sibling() {
        return Some(sibling);
    }
    let mut current = node.parent();
    while let Some(p) = current {
        if let Some(sibling) = p.next_sibling() {
            return Some(sibling);
        }
        current = p.parent();
    }
    None
}

/// [`next_node`] bounded to the subtree of `root`.
#[must_use]
pub fn next_within<'a>(
    node: &NodeRef<'a>,
    root: &NodeRef<'a>,
    skip_children: bool,
) -> Option<NodeRef<'a>> {
    if node.id == root.id && skip_children {
        return None;
    }
    next_node(node, skip_children).filter(|next| next.id != root.id && is_within(next, root))
}

/// Up to `max_depth` ancestors, nearest first. `0` means unlimited.
#[must_use]
pub fn ancestors<'a>(node: &NodeRef<'a>, max_depth: usize) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut current = parent_element(node);
    while let Some(p) = current {
        out.push(p);
        if max_depth > 0 && out.len() == max_depth {
            break;
        }
        current = parent_element(&p);
    }
    out
}

/// Whether an ancestor within `max_depth` levels (`0` = unlimited) has `tag`
/// and satisfies `filter`.
pub fn has_ancestor_tag<F>(node: &NodeRef, tag: &str, max_depth: usize, filter: F) -> bool
where
    F: Fn(&NodeRef) -> bool,
{
    ancestors(node, max_depth)
        .iter()
        .any(|a| is_tag(a, tag) && filter(a))
}

/// Whether `node` sits inside the subtree rooted at `root` (or is `root`).
#[must_use]
pub fn is_within(node: &NodeRef, root: &NodeRef) -> bool {
    if node.id == root.id {
        return true;
    }
    let mut current = node.parent();
    while let Some(p) = current {
        if p.id == root.id {
            return true;
        }
        current = p.parent();
    }
    false
}

// === Tree Manipulation ===

/// Detach `node` (and its subtree) from its parent.
#[inline]
pub fn remove(node: &NodeRef) {
    if let Some(parent) = node.parent() {
        remove_child(&parent, node);
    }
}

/// Detach `child` from `parent`. No-op when `child` is not a child of `parent`.
pub fn remove_child(parent: &NodeRef, child: &NodeRef) {
    if child.parent().is_some_and(|p| p.id == parent.id) {
        child.remove_from_parent();
    }
}

/// Put `new` where `old` is under `parent`; `old` ends up detached.
///
/// No-op when `old` is not a child of `parent`.
pub fn replace_child(parent: &NodeRef, old: &NodeRef, new: &NodeRef) {
    if !old.parent().is_some_and(|p| p.id == parent.id) {
        return;
    }
    new.remove_from_parent();
    old.insert_before(&new.id);
    old.remove_from_parent();
}

/// Move `child` to the end of `parent`'s children.
pub fn append_child(parent: &NodeRef, child: &NodeRef) {
    child.remove_from_parent();
    parent.append_child(&child.id);
}

/// Move `new` directly before `reference`.
pub fn insert_before(reference: &NodeRef, new: &NodeRef) {
    new.remove_from_parent();
    reference.insert_before(&new.id);
}

/// Move every child of `from` to the end of `to`, keeping their order.
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    for child in from.children() {
        append_child(to, &child);
    }
}

/// Replace `node` by its children, then drop it.
pub fn unwrap_node(node: &NodeRef) {
    for child in node.children() {
        insert_before(node, &child);
    }
    node.remove_from_parent();
}

#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    node.rename(new_tag);
}

/// New detached element owned by the same tree as `ctx`.
#[must_use]
pub fn create_element<'a>(ctx: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    ctx.tree.new_element(tag)
}

/// New detached text node owned by the same tree as `ctx`.
#[must_use]
pub fn create_text<'a>(ctx: &NodeRef<'a>, text: &str) -> NodeRef<'a> {
    ctx.tree.new_text(text)
}

// === Document Access ===

#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

#[must_use]
pub fn first_by_tag<'a>(doc: &'a Document, tag: &str) -> Option<NodeRef<'a>> {
    doc.select(tag).nodes().first().copied()
}

#[must_use]
pub fn all_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<NodeRef<'a>> {
    doc.select(tag).nodes().to_vec()
}

/// Number of elements in the document.
#[must_use]
pub fn count_elements(doc: &Document) -> usize {
    doc.select("*").length()
}

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
