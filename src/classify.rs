//! Marker classification.
//!
//! Runs once at initialization, before any hover event can arrive. Each
//! candidate marker is looked up in the abbreviation map by its exact text:
//! hits become `abbr` markers with hover handlers installed, misses become
//! plain `pos` markers.

use tracing::debug;

use crate::abbr::AbbrMap;
use crate::document::{EntryDocument, MarkerClass};
use crate::events::HoverBindings;

/// Classify every candidate marker and install hover bindings for the
/// abbreviations.
///
/// Pure side effect on the document and the binding registry; safe on an
/// empty candidate set. Re-running yields the same final classes. Markers
/// that stop matching the map on a later pass keep any binding installed
/// earlier, only the class toggles.
pub fn classify<D: EntryDocument>(doc: &mut D, abbr: &AbbrMap, bindings: &mut HoverBindings) {
    let candidates = doc.marker_nodes();
    let total = candidates.len();
    let mut matched = 0usize;
    for node in candidates {
        if abbr.contains(&doc.text_content(node)) {
            doc.set_marker_class(node, MarkerClass::Abbreviation);
            bindings.install(node);
            matched += 1;
        } else {
            doc.set_marker_class(node, MarkerClass::PartOfSpeech);
        }
    }
    debug!(total, matched, "classified markers");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MockDocument;

    fn sample_map() -> AbbrMap {
        let mut map = AbbrMap::new();
        map.insert("n.", "<i>noun</i>");
        map.insert("adj.", "<i>adjective</i>");
        map
    }

    #[test]
    fn known_text_becomes_abbr_with_binding() {
        let mut doc = MockDocument::new(1024.0);
        let node = doc.add_marker("n.", "pos", 10.0);
        let mut bindings = HoverBindings::new();

        classify(&mut doc, &sample_map(), &mut bindings);

        assert_eq!(doc.class_of(node), "abbr");
        assert!(bindings.is_bound(node));
    }

    #[test]
    fn unknown_text_becomes_pos_without_binding() {
        let mut doc = MockDocument::new(1024.0);
        let node = doc.add_marker("obscure", "abbr", 10.0);
        let mut bindings = HoverBindings::new();

        classify(&mut doc, &sample_map(), &mut bindings);

        assert_eq!(doc.class_of(node), "pos");
        assert!(!bindings.is_bound(node));
    }

    #[test]
    fn empty_candidate_set_is_a_noop() {
        let mut doc = MockDocument::new(1024.0);
        let mut bindings = HoverBindings::new();

        classify(&mut doc, &sample_map(), &mut bindings);

        assert!(bindings.is_empty());
        assert!(doc.popups().is_empty());
    }

    #[test]
    fn duplicate_texts_classify_independently() {
        let mut doc = MockDocument::new(1024.0);
        let first = doc.add_marker("n.", "pos", 10.0);
        let second = doc.add_marker("n.", "pos", 400.0);
        let mut bindings = HoverBindings::new();

        classify(&mut doc, &sample_map(), &mut bindings);

        assert_eq!(doc.class_of(first), "abbr");
        assert_eq!(doc.class_of(second), "abbr");
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn classification_is_idempotent() {
        let mut doc = MockDocument::new(1024.0);
        let known = doc.add_marker("adj.", "pos", 10.0);
        let unknown = doc.add_marker("misc", "pos", 60.0);
        let mut bindings = HoverBindings::new();
        let map = sample_map();

        classify(&mut doc, &map, &mut bindings);
        classify(&mut doc, &map, &mut bindings);

        assert_eq!(doc.class_of(known), "abbr");
        assert_eq!(doc.class_of(unknown), "pos");
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn binding_survives_reclassification_to_pos() {
        let mut doc = MockDocument::new(1024.0);
        let node = doc.add_marker("n.", "pos", 10.0);
        let mut bindings = HoverBindings::new();

        classify(&mut doc, &sample_map(), &mut bindings);
        assert!(bindings.is_bound(node));

        doc.set_marker_text(node, "gone");
        classify(&mut doc, &sample_map(), &mut bindings);

        assert_eq!(doc.class_of(node), "pos");
        assert!(bindings.is_bound(node));
    }
}
