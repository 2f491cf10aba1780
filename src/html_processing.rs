//! HTML Processing
//!
//! Structural normalization run once over the whole document before the
//! scoring walk. The steps are order-sensitive and run in sequence.

use dom_query::NodeRef;

use crate::dom::{self, Document};

/// Wrappers whose children are lifted into the wrapper's parent.
const UNWRAP_TAGS: &[&str] = &["form", "script", "noscript"];

/// Normalize `doc` in place.
///
/// 1. Remove every `<style>`.
/// 2. Turn `<br><br>` chains inside `<body>` into paragraphs.
/// 3. Rename `<font>` to `<span>`.
/// 4. Lift the children of `<form>`, `<script>` and `<noscript>`, dropping the
///    text of scripts.
pub fn prep_document(doc: &Document) {
    let styles = dom::all_by_tag(doc, "style");
    for style in &styles {
        dom::remove(style);
    }

    if let Some(body) = dom::body(doc) {
        replace_brs(&body);
    }

    for font in dom::all_by_tag(doc, "font") {
        dom::rename(&font, "span");
    }

    for tag in UNWRAP_TAGS {
        for wrapper in dom::all_by_tag(doc, tag) {
            lift_children(&wrapper, *tag != "form");
        }
    }

    tracing::debug!(styles = styles.len(), "document prepared");
}

/// Replace runs of two or more `<br>` with a `<p>` that absorbs the
/// following siblings.
///
/// Whitespace text between the `<br>`s does not break a run. Absorption stops
/// at the next run or at the end of the sibling list. A single `<br>` is left
/// alone.
pub fn replace_brs(root: &NodeRef) {
    for br in dom::descendants_by_tag(root, "br") {
        // removed as part of an earlier chain
        if !dom::is_within(&br, root) {
            continue;
        }

        let mut replaced = false;
        let mut next = dom::next_element(br.next_sibling());
        while let Some(n) = next.filter(|n| dom::is_tag(n, "br")) {
            replaced = true;
            let after = n.next_sibling();
            dom::remove(&n);
            next = dom::next_element(after);
        }
        if !replaced {
            continue;
        }

        let Some(parent) = dom::parent(&br) else {
            continue;
        };
        let p = dom::create_element(&br, "p");
        dom::replace_child(&parent, &br, &p);

        let mut next = p.next_sibling();
        while let Some(n) = next {
            if dom::is_tag(&n, "br") {
                let following = dom::next_element(n.next_sibling());
                if following.is_some_and(|f| dom::is_tag(&f, "br")) {
                    break;
                }
            }
            let sibling = n.next_sibling();
            dom::append_child(&p, &n);
            next = sibling;
        }

        while let Some(last) = p.last_child().filter(dom::is_whitespace_text) {
            dom::remove(&last);
        }

        if dom::is_tag(&parent, "p") {
            dom::rename(&parent, "div");
        }
    }
}

/// Move the children of `wrapper` to its position and drop it.
fn lift_children(wrapper: &NodeRef, drop_text: bool) {
    if drop_text {
        for child in dom::children(wrapper) {
            if dom::is_text(&child) {
                dom::remove(&child);
            }
        }
    }
    dom::unwrap_node(wrapper);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prep(html: &str) -> Document {
        let doc = dom::parse(html);
        prep_document(&doc);
        doc
    }

    #[test]
    fn test_styles_removed() {
        let doc = prep("<html><head><style>p{}</style></head><body><div><style>a{}</style><p>x</p></div></body></html>");
        assert!(doc.select("style").is_empty());
        assert_eq!(doc.select("p").length(), 1);
    }

    #[test]
    fn test_double_br_becomes_paragraphs() {
        let doc = prep("<body><div><br><br>text<br><br></div></body>");
        assert_eq!(doc.select("div > p").length(), 2);
        assert!(doc.select("br").is_empty());
        assert_eq!(doc.select("div > p").first().text().to_string(), "text");
    }

    #[test]
    fn test_single_br_untouched() {
        let doc = prep("<body><div>one<br>two</div></body>");
        assert_eq!(doc.select("br").length(), 1);
        assert!(doc.select("p").is_empty());
    }

    #[test]
    fn test_br_chain_with_whitespace_between() {
        let doc = prep("<body><div>intro<br>  <br>\n<br>second part<span>tail</span></div></body>");
        assert!(doc.select("br").is_empty());
        let p = doc.select("div > p");
        assert_eq!(p.length(), 1);
        assert_eq!(p.text().trim(), "second parttail");
    }

    #[test]
    fn test_absorption_stops_at_next_chain() {
        let doc = prep("<body><div><br><br>first<br><br>second</div></body>");
        let ps = doc.select("div > p");
        assert_eq!(ps.length(), 2);
        let texts: Vec<String> = ps.iter().map(|p| p.text().to_string()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_font_renamed() {
        let doc = prep(r#"<body><font color="red">x</font></body>"#);
        assert!(doc.select("font").is_empty());
        assert_eq!(doc.select("span").attr("color").map(|c| c.to_string()).as_deref(), Some("red"));
    }

    #[test]
    fn test_form_children_lifted() {
        let doc = prep(r#"<body><div id="d"><form><p>inside form</p></form></div></body>"#);
        assert!(doc.select("form").is_empty());
        assert_eq!(doc.select("#d > p").length(), 1);
    }

    #[test]
    fn test_script_text_dropped() {
        let doc = prep(r#"<body><div id="d">keep<script>var x = 1;</script></div></body>"#);
        assert!(doc.select("script").is_empty());
        assert_eq!(doc.select("#d").text().to_string(), "keep");
    }
}
