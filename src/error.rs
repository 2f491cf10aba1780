//! Error types for rs-readscrub.
//!
//! Only two conditions escape an extraction call. Everything else (missing
//! candidates, malformed numeric attributes, operations on detached nodes) is
//! recovered locally.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document holds more elements than `Options::max_elements_to_parse`.
    ///
    /// Raised before the tree is touched, so the caller's document is intact.
    #[error("document too large: {found} elements exceeds the limit of {max}")]
    InputTooLarge {
        /// Elements counted in the document.
        found: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The base URI given to [`crate::extract_html`] is not an absolute URL.
    #[error("invalid base URI: {0}")]
    InvalidUrl(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
