//! Link targets for URL entities.
//!
//! URL entities keep the exact text the author typed (`github.com/abc`,
//! `HTTPS://Example.com`). Clients rendering a post need an absolute link,
//! so this module turns an entity value into a canonical `http(s)` URL.
//! Nothing here touches the network.

use std::borrow::Cow;

use url::Url;

/// Scheme assumed when the author omitted one.
const DEFAULT_SCHEME: &str = "https://";

/// Errors that can occur while building a link target.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Builds the absolute link target for a URL entity value.
///
/// # Normalization Rules
///
/// 1. **Protocol**: `https://` is prepended when no scheme is present; only
///    HTTP and HTTPS are accepted
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Path, query and fragment**: Preserved
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for values the URL parser
/// rejects, [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S)
/// schemes, and [`UrlNormalizationError::MissingHost`] when no host remains.
///
/// # Examples
///
/// ```
/// use post_entities::utils::url_normalizer::link_target;
///
/// assert_eq!(link_target("github.com/abc").unwrap(), "https://github.com/abc");
/// assert_eq!(link_target("HTTP://Example.COM:80").unwrap(), "http://example.com/");
/// ```
pub fn link_target(value: &str) -> Result<String, UrlNormalizationError> {
    let candidate = if has_scheme(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME}{value}"))
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(url.to_string())
}

/// Returns true if `value` starts with an RFC 3986 scheme followed by `://`.
fn has_scheme(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
