//! `resolve` command: show the route of a single authored link.

use crate::{
    address::SiteContext,
    pipeline::{TransformContext, transform::resolve_link},
};
use anyhow::{Result, bail};
use std::path::Path;

/// Print the resolved route of `url` to stdout.
///
/// Fails when the link cannot be resolved.
pub fn resolve_url(url: &str, src_path: &Path, site: &dyn SiteContext) -> Result<()> {
    let route = route_for(url, src_path, site);
    if route.is_empty() {
        bail!("`{url}` does not resolve to any route (from {})", src_path.display());
    }
    println!("{route}");
    Ok(())
}

/// Route the link transform would write for `url`.
pub fn route_for(url: &str, src_path: &Path, site: &dyn SiteContext) -> String {
    let ctx = TransformContext::new(src_path, site);
    resolve_link(url, &ctx)
}
