//! Document rewriting pipeline.
//!
//! A [`Transformer`] looks at one node at a time and may hand a replacement
//! to its [`Scope`]. [`walk`] drives a transformer over a whole tree:
//!
//! ```text
//! walk(node)
//!   ├── transformer.transform(node, scope, ctx)
//!   ├── scope.commit(node)          # substitute in place, at most once
//!   └── walk(child) for each child  # children of the (new) node, in order
//! ```
//!
//! A replacement is never revisited, so transforms that rename tags are
//! applied exactly once per authored node.

mod error;
mod scope;
pub mod transform;

use std::path::Path;

use crate::address::SiteContext;
use crate::core::Node;

pub use error::TransformError;
pub use scope::Scope;
pub use transform::LinkTransform;

// =============================================================================
// Types
// =============================================================================

/// Read-only bundle handed to every transform call.
#[derive(Clone, Copy)]
pub struct TransformContext<'a> {
    /// Source document path, passed through to path deduction.
    pub src_path: &'a Path,
    /// Site collaborator (path index and output root).
    pub site: &'a dyn SiteContext,
}

impl<'a> TransformContext<'a> {
    pub fn new(src_path: &'a Path, site: &'a dyn SiteContext) -> Self {
        Self { src_path, site }
    }
}

/// A single-node visitor.
pub trait Transformer {
    /// Inspect `node`; call `scope.update` to replace it.
    fn transform(
        &self,
        node: &Node,
        scope: &mut Scope,
        ctx: &TransformContext<'_>,
    ) -> Result<(), TransformError>;
}

// =============================================================================
// Traversal
// =============================================================================

/// Visit every node of the tree once, depth-first, pre-order.
///
/// The first error aborts the walk; nodes already rewritten stay rewritten.
pub fn walk<T>(node: &mut Node, transformer: &T, ctx: &TransformContext<'_>) -> Result<(), TransformError>
where
    T: Transformer + ?Sized,
{
    let mut scope = Scope::new();
    transformer.transform(node, &mut scope, ctx)?;
    scope.commit(node);

    for child in node.children_mut() {
        walk(child, transformer, ctx)?;
    }
    Ok(())
}

/// Rewrite every link of a document tree in place.
#[inline]
pub fn rewrite_links(node: &mut Node, ctx: &TransformContext<'_>) -> Result<(), TransformError> {
    walk(node, &LinkTransform, ctx)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{PathIndex, Site};
    use serde_json::json;
    use std::cell::RefCell;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    /// Wraps every `em` into `strong`, recording visit order.
    struct Upgrade {
        visited: RefCell<Vec<String>>,
    }

    impl Transformer for Upgrade {
        fn transform(
            &self,
            node: &Node,
            scope: &mut Scope,
            _ctx: &TransformContext<'_>,
        ) -> Result<(), TransformError> {
            let Node::Element(elem) = node else {
                return Ok(());
            };
            self.visited.borrow_mut().push(elem.tag.clone());
            match elem.tag.as_str() {
                "em" => scope.update(Node::element(
                    "strong",
                    elem.props.clone(),
                    elem.children.clone(),
                )),
                "bad" => {
                    return Err(TransformError::MissingProps {
                        tag: elem.tag.clone(),
                    });
                }
                _ => {}
            }
            Ok(())
        }
    }

    fn upgrade() -> Upgrade {
        Upgrade {
            visited: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_walk_replaces_in_place_and_keeps_order() {
        let site = Site::new("/out", PathIndex::new());
        let ctx = TransformContext::new(Path::new("doc.md"), &site);
        let mut doc = node(json!(["p", null, "a", ["em", null, "b"], "c"]));

        let upgrade = upgrade();
        walk(&mut doc, &upgrade, &ctx).unwrap();

        assert_eq!(doc, node(json!(["p", null, "a", ["strong", null, "b"], "c"])));
    }

    #[test]
    fn test_walk_visits_each_node_once() {
        let site = Site::new("/out", PathIndex::new());
        let ctx = TransformContext::new(Path::new("doc.md"), &site);
        let mut doc = node(json!(["div", null, ["em", null, ["em", null, "x"]], ["span", null]]));

        let upgrade = upgrade();
        walk(&mut doc, &upgrade, &ctx).unwrap();

        // Replacements are not revisited, their children are
        assert_eq!(*upgrade.visited.borrow(), vec!["div", "em", "em", "span"]);
        assert_eq!(
            doc,
            node(json!(["div", null, ["strong", null, ["strong", null, "x"]], ["span", null]]))
        );
    }

    #[test]
    fn test_walk_stops_on_error() {
        let site = Site::new("/out", PathIndex::new());
        let ctx = TransformContext::new(Path::new("doc.md"), &site);
        let mut doc = node(json!(["div", null, ["bad", null], ["em", null]]));

        let upgrade = upgrade();
        let err = walk(&mut doc, &upgrade, &ctx).unwrap_err();

        assert_eq!(err, TransformError::MissingProps { tag: "bad".into() });
        assert_eq!(*upgrade.visited.borrow(), vec!["div", "bad"]);
    }

    #[test]
    fn test_rewrite_links_whole_document() {
        let site = Site::new(
            "/out",
            PathIndex::new().with_route("guide/start", "/docs/guide/start"),
        );
        let ctx = TransformContext::new(Path::new("src/index.md"), &site);
        let mut doc = node(json!([
            "section", null,
            ["p", null, "See ", ["a", {"href": "guide/start"}, "the guide"], "."],
            ["a", {"href": "#top"}, "Top"],
            ["a", {"href": "https://example.com"}, ["code", null, "example"]]
        ]));

        rewrite_links(&mut doc, &ctx).unwrap();

        assert_eq!(
            doc,
            node(json!([
                "section", null,
                ["p", null, "See ", ["docs-internal-link", {"href": "/docs/guide/start"}, "the guide"], "."],
                ["docs-in-page-link", {"targetId": "top"}, "Top"],
                ["amplify-external-link", {"href": "https://example.com"}, ["code", null, "example"]]
            ]))
        );
    }

    #[test]
    fn test_rewrite_links_missing_props_fails() {
        let site = Site::new("/out", PathIndex::new());
        let ctx = TransformContext::new(Path::new("src/index.md"), &site);
        let mut doc = node(json!(["div", null, ["docs-card", null, "x"]]));

        let err = rewrite_links(&mut doc, &ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encountered \"docs-card\" element without required prop `href`"
        );
    }
}
