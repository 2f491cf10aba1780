//! Link Density
//!
//! Fraction of a node's text that sits inside `<a>` descendants. Used to scale
//! candidate scores, to judge unscored paragraph siblings and by the
//! conditional cleaner.

use dom_query::NodeRef;

use crate::dom;

/// Trimmed link-text length over trimmed node-text length.
///
/// Always `0.0` for a node without text. Never above `1.0`: anchor text is a
/// subset of the node's text.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let text_length = dom::text_len(node);
    if text_length == 0 {
        return 0.0;
    }

    let link_length: usize = dom::descendants_by_tag(node, "a")
        .iter()
        .map(dom::text_len)
        .sum();

    (link_length as f64 / text_length as f64).min(1.0)
}
