//! The seam between this crate and the host's rendered document.
//!
//! The document tree, its layout engine, and the hover events all live in the
//! embedding renderer. This crate only needs a narrow view of that tree:
//! enumerate marker nodes, re-tag them, insert and remove popup siblings, and
//! read a few layout measurements. `EntryDocument` captures exactly that.

use std::fmt;

/// Class carried by popup nodes so downstream styling can target them.
pub const POPUP_CLASS: &str = "abbr_popup";

/// Opaque handle to a node in the host document.
///
/// Allocated and interpreted by the `EntryDocument` implementation; this
/// crate never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Final classification of a marker element.
///
/// Markers arrive from the renderer tagged as either part-of-speech or
/// abbreviation candidates; classification re-tags each one with exactly one
/// of these classes. The two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    /// Plain part-of-speech label, no expansion known.
    PartOfSpeech,
    /// Known abbreviation; eligible for a hover popup.
    Abbreviation,
}

impl MarkerClass {
    /// The CSS class downstream stylesheets key off of.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::PartOfSpeech => "pos",
            Self::Abbreviation => "abbr",
        }
    }
}

/// Host-document operations needed by classification and the popup
/// lifecycle.
///
/// All methods are synchronous; the caller (the host's UI event loop) drives
/// everything single-threaded, so an implementation never needs internal
/// locking. Layout-dependent values (`node_width`, `offset_left`,
/// `body_width`) must reflect the current tree, in particular a popup's width
/// is only meaningful after `insert_popup_after` has placed it in the tree.
pub trait EntryDocument {
    /// Candidate marker nodes in document order.
    ///
    /// These are the nodes the renderer tagged as part-of-speech or
    /// abbreviation candidates. The set is fixed for the lifetime of the
    /// page view.
    fn marker_nodes(&self) -> Vec<NodeId>;

    /// Text content of a node, used verbatim as the lookup key.
    fn text_content(&self, node: NodeId) -> String;

    /// Re-tag a marker with its final class, replacing the other class.
    fn set_marker_class(&mut self, node: NodeId, class: MarkerClass);

    /// Insert a popup node immediately after `anchor` as a sibling.
    ///
    /// The popup carries [`POPUP_CLASS`], the given markup verbatim (the
    /// expansion content is pre-trusted, no escaping), and starts hidden so
    /// it can be measured before it is positioned.
    fn insert_popup_after(&mut self, anchor: NodeId, html: &str) -> NodeId;

    /// Rendered width of a node. Valid once the node is in the tree.
    fn node_width(&self, node: NodeId) -> f64;

    /// Horizontal offset of a node's left edge from the document's left
    /// edge.
    fn offset_left(&self, node: NodeId) -> f64;

    /// Total width of the document body.
    fn body_width(&self) -> f64;

    /// Apply the computed left offset to a popup and make it visible.
    fn show_at(&mut self, node: NodeId, left: f64);

    /// Remove a node from the tree.
    fn remove_node(&mut self, node: NodeId);
}
