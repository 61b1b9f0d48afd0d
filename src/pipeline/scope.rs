//! Scope - the write-back handle given to a transformer.

use crate::core::Node;

/// Replacement slot for the node currently being visited.
///
/// A transformer signals its decision by calling [`update`](Self::update)
/// zero or one time. The walker then commits the replacement at the visited
/// node's position in its parent, so sibling order never changes.
#[derive(Debug, Default)]
pub struct Scope {
    replacement: Option<Node>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visited node.
    pub fn update(&mut self, node: Node) {
        self.replacement = Some(node);
    }

    /// Take the recorded replacement, if any.
    pub fn into_replacement(self) -> Option<Node> {
        self.replacement
    }

    /// Write the replacement into `slot`. Returns whether anything changed.
    pub fn commit(self, slot: &mut Node) -> bool {
        match self.into_replacement() {
            Some(node) => {
                *slot = node;
                true
            }
            None => false,
        }
    }
}
