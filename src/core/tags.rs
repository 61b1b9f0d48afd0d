//! Static lookup tables for link-bearing tags.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Tags whose `href`/`url` prop is rewritten by the link visitor.
pub static LINK_TAGS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "a",
        "amplify-card",
        "docs-card",
        "docs-internal-link-button",
        "docs-in-page-link",
    ]
    .into_iter()
    .collect()
});

/// File extensions a link target may carry.
///
/// Exposed as data only; no rewriting rule consults it.
pub static VALID_LINK_EXTENSIONS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    ["svg", "jpg", "jpeg", "png", "gif", "md"]
        .into_iter()
        .collect()
});

/// Check if a tag is eligible for link rewriting.
#[inline]
pub fn is_link_tag(tag: &str) -> bool {
    LINK_TAGS.contains(tag)
}
