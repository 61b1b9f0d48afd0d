//! Document transforms.
//!
//! # Modules
//!
//! - `link`: Rewrites `href`/`url` of link tags into resolved site routes

mod link;

pub use link::{LinkTransform, resolve_link, resolve_route};
