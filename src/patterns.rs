//! Compiled regex patterns for content extraction.
//!
//! All patterns are compiled once using `LazyLock` and are case-insensitive.
//! Class/id checks run against the `"<class> <id>"` match string built by
//! [`crate::dom::match_string`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Candidate Classification
// =============================================================================

/// Class/id tokens of page furniture that is never article content.
///
/// `style` is deliberately absent: it would match the `readability-styled`
/// marker put on synthesized paragraphs.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)sidebar|aside|banner|breadcrumbs|combx|comment|community|cover-wrap|disqus|extra|foot|header|legends|menu|related|remark|replies|rss|shoutbox|skyscraper|social|sponsor|supplemental|ad-break|agegate|pagination|pager|popup|yom-remote",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Overrides [`UNLIKELY_CANDIDATES`].
pub static MAYBE_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)and|article|body|column|main|shadow|section").expect("MAYBE_CANDIDATES regex")
});

pub static POSITIVE_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story",
    )
    .expect("POSITIVE_CANDIDATES regex")
});

pub static NEGATIVE_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)hidden|^hid$| hid$| hid |^hid |banner|combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE_CANDIDATES regex")
});

pub static BYLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)byline|author|dateline|writtenby|p-author").expect("BYLINE regex")
});

/// Embeds from these hosts survive the unconditional embed cleanup.
pub static VIDEOS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)//(www\.)?(dailymotion|youtube|youtube-nocookie|player\.vimeo)\.com")
        .expect("VIDEOS regex")
});

/// Share widgets removed from inside the top-level content blocks.
pub static SHARE_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\b|_)(share|sharedaddy)(\b|_)").expect("SHARE_ELEMENTS regex")
});

// =============================================================================
// Text Shape
// =============================================================================

/// Whole-string whitespace test.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*$").expect("WHITESPACE regex"));

/// Runs of two or more whitespace characters.
pub static NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("NORMALIZE regex"));

/// Word boundaries for title word counts.
pub static WORD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WORD_BREAK regex"));

/// A period followed by a space or the end of the text.
pub static SENTENCE_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.( |$)").expect("SENTENCE_TAIL regex"));

// =============================================================================
// Metadata
// =============================================================================

/// `name` values of interest: `description`, `title`, `twitter:*` variants.
pub static META_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*((twitter)\s*:\s*)?(description|title)\s*$").expect("META_NAME regex")
});

/// `property` values of interest: `og:description`, `og:title`.
pub static META_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*og\s*:\s*(description|title)\s*$").expect("META_PROPERTY regex")
});

// =============================================================================
// Title Separators
// =============================================================================

/// A separator character surrounded by spaces.
pub static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [\|\-\\/>»] ").expect("TITLE_SEPARATOR regex"));

/// Separators that imply a site hierarchy (`/`, `\`, `>`, `»`).
pub static TITLE_HIERARCHICAL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [\\/>»] ").expect("TITLE_HIERARCHICAL_SEPARATOR regex"));

/// Everything up to the last separator; `$1` keeps the leading part.
pub static TITLE_TRAILING_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)[\|\-\\/>»] .*").expect("TITLE_TRAILING_SEGMENT regex"));

/// Everything after the first separator; `$1` keeps the trailing part.
pub static TITLE_LEADING_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\|\-\\/>»]*[\|\-\\/>»](.*)").expect("TITLE_LEADING_SEGMENT regex")
});

pub static TITLE_SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\|\-\\/>»]+").expect("TITLE_SEPARATOR_RUN regex"));
