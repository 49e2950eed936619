//! Hover events and per-node hover bindings.
//!
//! The host renderer owns the real event system; it forwards hover
//! enter/leave notifications to this crate as plain values carrying the
//! affected node. A binding registry records which nodes classification has
//! wired up, so events on unbound nodes fall through as no-ops.

use std::collections::HashSet;

use crate::document::NodeId;

/// Direction of a hover transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverKind {
    Enter,
    Leave,
}

/// A hover transition on a marker node, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEvent {
    pub kind: HoverKind,
    pub target: NodeId,
}

impl HoverEvent {
    #[must_use]
    pub fn enter(target: NodeId) -> Self {
        Self {
            kind: HoverKind::Enter,
            target,
        }
    }

    #[must_use]
    pub fn leave(target: NodeId) -> Self {
        Self {
            kind: HoverKind::Leave,
            target,
        }
    }
}

/// Nodes with hover handlers installed.
///
/// Installation is idempotent. Bindings are only ever added: a node that
/// later reclassifies as plain part-of-speech keeps its binding, matching
/// how repeated classification passes behave in the page.
#[derive(Debug, Clone, Default)]
pub struct HoverBindings {
    bound: HashSet<NodeId>,
}

impl HoverBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, node: NodeId) {
        self.bound.insert(node);
    }

    #[must_use]
    pub fn is_bound(&self, node: NodeId) -> bool {
        self.bound.contains(&node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
