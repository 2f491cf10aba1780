//! Score arithmetic shared by the scoring walk, the selector and the cleaner.
//!
//! Everything here is a pure function of a node (or its text) and the pass
//! flags. Mutable per-run state lives in [`crate::extractor::state`].

use dom_query::NodeRef;

use crate::dom;
use crate::options::Flags;
use crate::patterns::{NEGATIVE_CANDIDATES, POSITIVE_CANDIDATES};

/// Weight added or subtracted per matching `class` or `id`.
pub const CLASS_WEIGHT: f64 = 25.0;

/// Tags a recorded node may be scored as.
pub const DEFAULT_TAGS_TO_SCORE: &[&str] = &["section", "h2", "h3", "h4", "h5", "h6", "p", "td", "pre"];

/// Ancestors that receive a share of a paragraph's score.
pub const SCORE_ANCESTOR_DEPTH: usize = 3;

/// Class/id weight of `node`: −25 per negative match, +25 per positive match,
/// `class` and `id` checked independently.
///
/// Always `0` when `weight_classes` is off.
#[must_use]
pub fn class_weight(node: &NodeRef, flags: Flags) -> f64 {
    if !flags.weight_classes {
        return 0.0;
    }

    let mut weight = 0.0;
    for name in ["class", "id"] {
        let Some(value) = dom::attr(node, name) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if NEGATIVE_CANDIDATES.is_match(&value) {
            weight -= CLASS_WEIGHT;
        }
        if POSITIVE_CANDIDATES.is_match(&value) {
            weight += CLASS_WEIGHT;
        }
    }
    weight
}

/// Bonus a candidate starts with, by tag.
#[must_use]
pub fn type_bonus(tag: &str) -> f64 {
    match tag {
        "div" => 5.0,
        "pre" | "td" | "blockquote" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        _ => 0.0,
    }
}

/// Score a candidate holds when first touched.
#[must_use]
pub fn initial_score(node: &NodeRef, flags: Flags) -> f64 {
    let tag = dom::tag_name(node).unwrap_or_default();
    type_bonus(&tag) + class_weight(node, flags)
}

/// Divider applied to a paragraph's score for the ancestor at `level`
/// (0 for the parent): 1, 2, then `level * 3`.
#[must_use]
pub fn score_divider(level: usize) -> f64 {
    match level {
        0 => 1.0,
        1 => 2.0,
        _ => (level * 3) as f64,
    }
}

/// Number of literal commas in `text`.
#[must_use]
pub fn comma_count(text: &str) -> usize {
    text.matches(',').count()
}

/// Base score of a recorded paragraph with the given (trimmed) text:
/// one point, plus one per comma, plus one per 100 characters up to 3.
#[must_use]
pub fn paragraph_score(text: &str) -> f64 {
    let length_bonus = (text.chars().count() / 100).min(3);
    (1 + comma_count(text) + length_bonus) as f64
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;
    use dom_query::Document;

    fn first<'a>(doc: &'a Document, css: &str) -> NodeRef<'a> {
        doc.select(css).nodes().first().copied().unwrap()
    }

    #[test]
    fn test_class_weight_class_and_id_independent() {
        let doc = Document::from(
            r#"<div id="a" class="post-content"></div>
               <div id="b" class="sidebar"></div>
               <div id="main-content" class="comment"></div>"#,
        );
        let flags = Flags::default();

        assert_eq!(class_weight(&first(&doc, "#a"), flags), 25.0);
        assert_eq!(class_weight(&first(&doc, "#b"), flags), -25.0);
        // class negative, id positive
        assert_eq!(class_weight(&first(&doc, "#main-content"), flags), 0.0);
    }

    #[test]
    fn test_class_weight_disabled() {
        let doc = Document::from(r#"<div class="sidebar"></div>"#);
        let flags = Flags {
            weight_classes: false,
            ..Flags::default()
        };
        assert_eq!(class_weight(&first(&doc, "div"), flags), 0.0);
    }

    #[test]
    fn test_type_bonus() {
        assert_eq!(type_bonus("div"), 5.0);
        assert_eq!(type_bonus("blockquote"), 3.0);
        assert_eq!(type_bonus("li"), -3.0);
        assert_eq!(type_bonus("th"), -5.0);
        assert_eq!(type_bonus("article"), 0.0);
    }

    #[test]
    fn test_initial_score_combines_bonus_and_weight() {
        let doc = Document::from(r#"<div class="article"></div><ul class="footer"></ul>"#);
        let flags = Flags::default();
        assert_eq!(initial_score(&first(&doc, "div"), flags), 30.0);
        assert_eq!(initial_score(&first(&doc, "ul"), flags), -28.0);
    }

    #[test]
    fn test_score_divider_sequence() {
        assert_eq!(score_divider(0), 1.0);
        assert_eq!(score_divider(1), 2.0);
        assert_eq!(score_divider(2), 6.0);
        assert_eq!(score_divider(3), 9.0);
    }

    #[test]
    fn test_paragraph_score() {
        assert_eq!(paragraph_score("short"), 1.0);
        assert_eq!(paragraph_score("a, b, c"), 3.0);
        assert_eq!(paragraph_score(&"x".repeat(250)), 3.0);
        assert_eq!(paragraph_score(&"x".repeat(1000)), 4.0);
    }
}
