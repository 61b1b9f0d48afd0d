//! Link processor.
//!
//! Rewrites the `href`/`url` prop of link tags into final site routes and
//! renames the tag where the renderer needs a different component.
//!
//! # Link Resolution
//!
//! Links are resolved based on their syntax using [`LinkKind`]:
//!
//! | LinkKind   | Example           | Result                              |
//! |------------|-------------------|-------------------------------------|
//! | `External` | `https://...`     | Preserved as-is                     |
//! | `InPage`   | `#section`        | Node becomes `docs-in-page-link`    |
//! | `Internal` | `guide/start`     | Looked up via path deduction        |
//!
//! # Tag Rules
//!
//! | Tag                          | New tag                                        | Prop   |
//! |------------------------------|------------------------------------------------|--------|
//! | `a`                          | `amplify-external-link` / `docs-internal-link` | `href` |
//! | `amplify-card`, `docs-card`  | unchanged                                      | `url`  |
//! | `docs-internal-link-button`  | unchanged                                      | `href` |
//! | `docs-in-page-link`          | unchanged                                      | none   |

use crate::core::{Element, LinkKind, Node, Props, is_link_tag, str_prop};
use crate::debug;
use crate::utils::path::route::{ParsedUrl, route_from_destination};
use crate::utils::path::{normalize_internal, parse_url, split_query};

use crate::pipeline::{Scope, TransformContext, TransformError, Transformer};

const EXTERNAL_LINK_TAG: &str = "amplify-external-link";
const INTERNAL_LINK_TAG: &str = "docs-internal-link";
const IN_PAGE_LINK_TAG: &str = "docs-in-page-link";

/// Card prop pointing mobile filters at a different page.
const MOBILE_FILTER_OVERRIDE: &str = "url-override-for-mobile-filter";

// =============================================================================
// Transform
// =============================================================================

/// Rewrites link tags into rendering-ready nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTransform;

impl Transformer for LinkTransform {
    fn transform(
        &self,
        node: &Node,
        scope: &mut Scope,
        ctx: &TransformContext<'_>,
    ) -> Result<(), TransformError> {
        let Node::Element(elem) = node else {
            return Ok(());
        };
        if !is_link_tag(&elem.tag) {
            return Ok(());
        }

        let Some(props) = &elem.props else {
            return Err(TransformError::MissingProps {
                tag: elem.tag.clone(),
            });
        };

        let Some(url) = str_prop(props, "href").or_else(|| str_prop(props, "url")) else {
            return Ok(());
        };

        scope.update(rewrite_element(elem, props, url, ctx));
        Ok(())
    }
}

/// Build the replacement for a link element.
///
/// `props` is copied, never modified.
fn rewrite_element(elem: &Element, props: &Props, url: &str, ctx: &TransformContext<'_>) -> Node {
    let kind = LinkKind::parse(url);

    if let LinkKind::InPage(anchor) = kind {
        let mut props = Props::new();
        props.insert("targetId".into(), anchor.into());
        return Node::element(IN_PAGE_LINK_TAG, Some(props), elem.children.clone());
    }

    let is_external = matches!(kind, LinkKind::External(_));
    let route = resolve_kind(kind, ctx);

    let mut tag = elem.tag.as_str();
    let mut new_props = props.clone();

    match elem.tag.as_str() {
        "a" => {
            tag = if is_external {
                EXTERNAL_LINK_TAG
            } else {
                INTERNAL_LINK_TAG
            };
            new_props.insert("href".into(), route.into());
        }
        "amplify-card" | "docs-card" => {
            new_props.insert("url".into(), route.into());

            // Unresolvable overrides stay as authored
            if let Some(target) = str_prop(props, MOBILE_FILTER_OVERRIDE) {
                let override_route = resolve_link(target, ctx);
                if !override_route.is_empty() {
                    new_props.insert(MOBILE_FILTER_OVERRIDE.into(), override_route.into());
                }
            }
        }
        "docs-internal-link-button" => {
            new_props.insert("href".into(), route.into());
        }
        _ => {}
    }

    Node::element(tag, Some(new_props), elem.children.clone())
}

// =============================================================================
// Link Processing Logic
// =============================================================================

/// Resolve an authored link to its final URL string.
///
/// - External URLs (http://, https://) → preserved as-is
/// - In-page anchors (#section) → preserved as-is
/// - Everything else → anchored at the content root and resolved through
///   [`resolve_route`]; an empty string means unresolvable
pub fn resolve_link(url: &str, ctx: &TransformContext<'_>) -> String {
    resolve_kind(LinkKind::parse(url), ctx)
}

fn resolve_kind(kind: LinkKind<'_>, ctx: &TransformContext<'_>) -> String {
    match kind {
        LinkKind::External(url) => url.to_string(),
        LinkKind::InPage(anchor) => format!("#{anchor}"),
        LinkKind::Internal(path) => resolve_route(&normalize_internal(path), ctx),
    }
}

/// Resolve a root-anchored internal URL against the site.
///
/// The fragment and any `/q/key/value` query are split off before the path
/// deduction. They are reattached only when a route is found; a destination
/// path is turned into a route on its own.
pub fn resolve_route(url: &str, ctx: &TransformContext<'_>) -> String {
    let ParsedUrl { path, hash } = parse_url(url);
    if path.is_empty() {
        return String::new();
    }

    let (path, query) = split_query(path);
    let deduction = ctx.site.resolve_path_deduction(path, ctx.src_path);

    if let Some(route) = deduction.route_str() {
        return format!("{route}{query}{hash}");
    }

    // Destination routes never carry the query or hash
    if let Some(destination) = deduction.destination_str() {
        return route_from_destination(ctx.site.out_dir(), destination);
    }

    debug!("link"; "unresolved link `{}` in {}", url, ctx.src_path.display());
    String::new()
}

// =============================================================================
// Tests
// =============================================================================
