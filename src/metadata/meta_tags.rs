//! HTML meta tag scanning.
//!
//! Collects the author, description and title candidates from `<meta>` tags,
//! including their Open Graph and Twitter card variants.

use std::collections::HashMap;

use dom_query::Document;

use crate::dom;
use crate::patterns::{META_NAME, META_PROPERTY, WORD_BREAK};

/// Values found in the document's `<meta>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    /// First non-empty `author` meta.
    pub author: Option<String>,
    /// `description` > `og:description` > `twitter:description`.
    pub description: Option<String>,
    /// `og:title` > `twitter:title`.
    pub title: Option<String>,
}

/// Scan every `<meta>` tag of `doc`.
///
/// `name`/`property` keys are lowercased and stripped of whitespace before
/// lookup, so `Twitter : Description` counts as `twitter:description`. The
/// first occurrence of a key wins.
#[must_use]
pub fn examine_meta(doc: &Document) -> MetaTags {
    let mut author = None;
    let mut values: HashMap<String, String> = HashMap::new();

    for meta in dom::all_by_tag(doc, "meta") {
        let Some(content) = dom::attr(&meta, "content")
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
        else {
            continue;
        };
        let name = dom::attr(&meta, "name").unwrap_or_default();
        let property = dom::attr(&meta, "property").unwrap_or_default();

        if is_author(&name) || is_author(&property) {
            if author.is_none() {
                author = Some(content);
            }
            continue;
        }

        let key = if META_NAME.is_match(&name) {
            name
        } else if META_PROPERTY.is_match(&property) {
            property
        } else {
            continue;
        };
        let key = WORD_BREAK.replace_all(&key.to_lowercase(), "").into_owned();
        values.entry(key).or_insert(content);
    }

    let pick = |keys: &[&str]| keys.iter().find_map(|k| values.get(*k).cloned());
    let tags = MetaTags {
        author,
        description: pick(&["description", "og:description", "twitter:description"]),
        title: pick(&["og:title", "twitter:title"]),
    };
    tracing::trace!(
        author = tags.author.is_some(),
        description = tags.description.is_some(),
        title = tags.title.is_some(),
        "meta tags examined"
    );
    tags
}

fn is_author(key: &str) -> bool {
    key.trim().eq_ignore_ascii_case("author")
}
