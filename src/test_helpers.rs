//! Test helpers: an in-memory `EntryDocument` implementation.
//!
//! Markers are laid out by hand (`add_marker` assigns the offset); popup
//! "measurement" returns a per-document width configured by the test, since
//! there is no real layout engine here.

use crate::document::{EntryDocument, MarkerClass, NodeId, POPUP_CLASS};

/// A node in the mock tree, marker or popup.
#[derive(Debug, Clone)]
pub struct MockNode {
    pub id: NodeId,
    pub text: String,
    pub class: String,
    pub html: String,
    pub left: f64,
    pub width: f64,
    pub visible: bool,
    pub is_marker: bool,
}

/// In-memory document: a flat node list in document order.
#[derive(Debug)]
pub struct MockDocument {
    nodes: Vec<MockNode>,
    body_width: f64,
    popup_width: f64,
    next_id: u64,
}

impl MockDocument {
    pub fn new(body_width: f64) -> Self {
        Self {
            nodes: Vec::new(),
            body_width,
            popup_width: 120.0,
            next_id: 0,
        }
    }

    /// Width every subsequently inserted popup will measure at.
    pub fn set_popup_width(&mut self, width: f64) {
        self.popup_width = width;
    }

    /// Append a candidate marker with the given initial class and offset.
    pub fn add_marker(&mut self, text: &str, class: &str, left: f64) -> NodeId {
        let id = self.alloc_id();
        self.nodes.push(MockNode {
            id,
            text: text.to_string(),
            class: class.to_string(),
            html: String::new(),
            left,
            width: 0.0,
            visible: true,
            is_marker: true,
        });
        id
    }

    /// Replace a marker's text, as if the renderer swapped the content.
    pub fn set_marker_text(&mut self, id: NodeId, text: &str) {
        self.node_mut(id).text = text.to_string();
    }

    pub fn class_of(&self, id: NodeId) -> &str {
        &self.node(id).class
    }

    pub fn node(&self, id: NodeId) -> &MockNode {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .expect("node exists")
    }

    /// All popup nodes currently in the tree, in document order.
    pub fn popups(&self) -> Vec<&MockNode> {
        self.nodes
            .iter()
            .filter(|node| node.class == POPUP_CLASS)
            .collect()
    }

    /// Position of a node in document order.
    pub fn position_of(&self, id: NodeId) -> usize {
        self.nodes
            .iter()
            .position(|node| node.id == id)
            .expect("node exists")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut MockNode {
        self.nodes
            .iter_mut()
            .find(|node| node.id == id)
            .expect("node exists")
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl EntryDocument for MockDocument {
    fn marker_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| node.is_marker)
            .map(|node| node.id)
            .collect()
    }

    fn text_content(&self, node: NodeId) -> String {
        self.node(node).text.clone()
    }

    fn set_marker_class(&mut self, node: NodeId, class: MarkerClass) {
        self.node_mut(node).class = class.css_class().to_string();
    }

    fn insert_popup_after(&mut self, anchor: NodeId, html: &str) -> NodeId {
        let id = self.alloc_id();
        let popup = MockNode {
            id,
            text: String::new(),
            class: POPUP_CLASS.to_string(),
            html: html.to_string(),
            left: 0.0,
            width: self.popup_width,
            visible: false,
            is_marker: false,
        };
        let index = self.position_of(anchor);
        self.nodes.insert(index + 1, popup);
        id
    }

    fn node_width(&self, node: NodeId) -> f64 {
        self.node(node).width
    }

    fn offset_left(&self, node: NodeId) -> f64 {
        self.node(node).left
    }

    fn body_width(&self) -> f64 {
        self.body_width
    }

    fn show_at(&mut self, node: NodeId, left: f64) {
        let popup = self.node_mut(node);
        popup.left = left;
        popup.visible = true;
    }

    fn remove_node(&mut self, node: NodeId) {
        self.nodes.retain(|n| n.id != node);
    }
}
