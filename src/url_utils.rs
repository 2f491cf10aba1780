//! URL utility functions.
//!
//! Base URI parsing and resolution of the relative references found in the
//! extracted content.

use url::Url;

use crate::error::{Error, Result};

/// Parse the base URI extraction resolves links against.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `s` is not an absolute URL.
pub fn parse_base_uri(s: &str) -> Result<Url> {
    let s = s.trim();
    Url::parse(s).map_err(|err| Error::InvalidUrl(format!("{s} ({err})")))
}

/// Check if a reference uses the `javascript:` scheme.
#[must_use]
pub fn is_javascript_uri(uri: &str) -> bool {
    uri.trim_start()
        .get(..11)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

/// Resolve `uri` against `base`.
///
/// Fragment-only references (`#section`) stay as they are so in-page links
/// keep working. References that cannot be resolved are returned unchanged.
#[must_use]
pub fn to_absolute_uri(uri: &str, base: &Url) -> String {
    let trimmed = uri.trim();
    if trimmed.starts_with('#') {
        return uri.to_string();
    }
    match base.join(trimmed) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => {
            tracing::trace!(uri, error = %err, "leaving unresolvable reference");
            uri.to_string()
        }
    }
}
