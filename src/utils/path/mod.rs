//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: File system path normalization (`normalize_path`, `expand_tilde`)
//! - [`route`]: URL utilities (`parse_url`, `split_query`, `normalize_internal`, `route_from_destination`)

pub mod fs;
pub mod route;

pub use fs::{expand_tilde, normalize_path};
pub use route::{ROOT_MARKER, normalize_internal, parse_url, split_query};
