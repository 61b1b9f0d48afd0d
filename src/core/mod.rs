//! Core types - document nodes, link classification and tag tables.

mod link;
mod node;
mod tags;

pub use link::LinkKind;
pub use node::{Element, Node, NodeError, Props, str_prop};
pub use tags::{LINK_TAGS, VALID_LINK_EXTENSIONS, is_link_tag};
