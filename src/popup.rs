//! Popup lifecycle: show on hover-enter, tear down on hover-leave.
//!
//! The controller owns the abbreviation map, the hover bindings, and the set
//! of popups it has inserted. Hover events are dispatched by the host one at
//! a time on its UI event loop; each show runs insert, then measure, then
//! place, then reveal, strictly in that order (the width is only meaningful
//! once the popup is in the tree).

use tracing::trace;

use crate::abbr::AbbrMap;
use crate::classify::classify;
use crate::config::TooltipConfig;
use crate::document::{EntryDocument, NodeId};
use crate::events::{HoverBindings, HoverEvent, HoverKind};
use crate::placement::{self, DEFAULT_CLAMP_WIDTH};

/// Classifies markers and drives popup show/hide for a page view.
#[derive(Debug)]
pub struct TooltipController {
    abbr: AbbrMap,
    clamp_width: f64,
    bindings: HoverBindings,
    active: Vec<NodeId>,
}

impl TooltipController {
    /// Controller with the default placement clamp.
    #[must_use]
    pub fn new(abbr: AbbrMap) -> Self {
        Self {
            abbr,
            clamp_width: DEFAULT_CLAMP_WIDTH,
            bindings: HoverBindings::new(),
            active: Vec::new(),
        }
    }

    /// Controller with the placement clamp taken from `config`.
    #[must_use]
    pub fn with_config(abbr: AbbrMap, config: &TooltipConfig) -> Self {
        let mut controller = Self::new(abbr);
        controller.clamp_width = config.popup.clamp_width;
        controller
    }

    /// Classify all candidate markers and install hover bindings.
    ///
    /// Call once after the renderer has produced the marked-up entry,
    /// before forwarding any hover events.
    pub fn prepare<D: EntryDocument>(&mut self, doc: &mut D) {
        classify(doc, &self.abbr, &mut self.bindings);
    }

    /// React to a hover transition reported by the host.
    ///
    /// Events on nodes without an installed binding are ignored.
    pub fn handle_hover<D: EntryDocument>(&mut self, doc: &mut D, event: HoverEvent) {
        if !self.bindings.is_bound(event.target) {
            return;
        }
        match event.kind {
            HoverKind::Enter => self.show(doc, event.target),
            HoverKind::Leave => self.hide(doc),
        }
    }

    /// Number of popups currently inserted by this controller.
    #[must_use]
    pub fn active_popups(&self) -> usize {
        self.active.len()
    }

    /// The hover binding registry.
    #[must_use]
    pub fn bindings(&self) -> &HoverBindings {
        &self.bindings
    }

    fn show<D: EntryDocument>(&mut self, doc: &mut D, target: NodeId) {
        let text = doc.text_content(target);
        // The map is static, so a miss here only happens if the host re-tags
        // nodes behind our back; render empty content rather than fail.
        let html = self.abbr.expansion(&text).unwrap_or_default();
        let popup = doc.insert_popup_after(target, html);
        let width = doc.node_width(popup);
        let left = placement::clamp_left(
            doc.offset_left(target),
            width,
            doc.body_width(),
            self.clamp_width,
        );
        doc.show_at(popup, left);
        self.active.push(popup);
        trace!(%target, %popup, left, "popup shown");
    }

    fn hide<D: EntryDocument>(&mut self, doc: &mut D) {
        // Global teardown: a leave on any trigger removes every popup, not
        // just the one belonging to that trigger.
        let removed = self.active.len();
        for popup in self.active.drain(..) {
            doc.remove_node(popup);
        }
        if removed > 0 {
            trace!(removed, "popups removed");
        }
    }
}
