//! doclinks - rewrite authored documentation links into resolved site routes.
//!
//! Documents are trees of `(tag, props, ...children)` nodes. The
//! [`LinkTransform`](pipeline::LinkTransform) visitor turns link tags into
//! rendering-ready nodes whose targets are final site routes:
//!
//! ```text
//! ["a", {"href": "guide/start"}, "Start"]
//!   -> ["docs-internal-link", {"href": "/docs/guide/start"}, "Start"]
//! ```
//!
//! # Module Structure
//!
//! - [`core`]: Node model, link classification, tag tables
//! - [`address`]: Path deduction (`SiteContext`, `PathIndex`, `Site`)
//! - [`pipeline`]: `Transformer`, `Scope`, `walk` and the link transform
//! - [`config`]: `doclinks.toml` loading
//! - [`cli`]: Command-line commands

pub mod address;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod pipeline;
pub mod utils;
