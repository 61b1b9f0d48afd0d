//! Link classification utilities.

use regex::Regex;
use std::sync::LazyLock;

/// Absolute http(s) URL, scheme matched case-insensitively.
static ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)^https?://").unwrap());

/// Syntactic classification of an authored `href`/`url` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Absolute http/https URL, used verbatim as the route.
    External(&'a str),
    /// In-page anchor (#section). Value is the anchor without `#`.
    InPage(&'a str),
    /// Any other link, resolved against the site path index.
    Internal(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    ///
    /// The external check runs first, so `https://host/#x` is external.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if Self::is_http(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::InPage(anchor)
        } else {
            Self::Internal(link)
        }
    }

    /// Check if link is an absolute HTTP/HTTPS URL.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        ABSOLUTE_URL.is_match(link)
    }
}
