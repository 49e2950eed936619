//! Hover tooltip annotations for abbreviation markers in rendered
//! dictionary entry views.
//!
//! A rendered entry tags part-of-speech and abbreviation markers with the
//! `pos` and `abbr` classes. This crate classifies those markers against a
//! known abbreviation map, and for the matches drives a hover popup showing
//! the abbreviation's expansion, positioned so it never overflows the
//! visible document width.
//!
//! ## Quick Start
//!
//! ```
//! use xdxf_tooltips::{AbbrMap, TooltipConfig, TooltipController};
//!
//! let mut map = AbbrMap::new();
//! map.insert("n.", "<i>noun</i>");
//!
//! let controller = TooltipController::with_config(map, &TooltipConfig::default());
//! assert_eq!(controller.active_popups(), 0);
//! ```
//!
//! ## Architecture
//!
//! The document tree, layout, and real event system belong to the embedding
//! renderer, which implements [`EntryDocument`]. The flow is:
//!
//! 1. The host builds an [`AbbrMap`] (in code, from a file, or from XDXF
//!    definition groups) and a [`TooltipController`].
//! 2. `TooltipController::prepare` classifies every candidate marker once,
//!    re-tagging it `abbr` or `pos` and installing hover bindings for the
//!    abbreviations.
//! 3. The host forwards hover transitions as [`HoverEvent`]s to
//!    `TooltipController::handle_hover`. Enter inserts a popup sibling,
//!    measures it, clamps its left offset to the container, and reveals it;
//!    leave removes every popup the controller has inserted.
//!
//! Everything is synchronous and single-threaded on the host's UI event
//! loop; there is no background work.

// Public library modules
pub mod abbr;
pub mod classify;
pub mod config;
pub mod document;
pub mod events;
pub mod placement;
pub mod popup;
pub mod tracing;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use abbr::{AbbrDef, AbbrLoadError, AbbrMap};
pub use config::TooltipConfig;
pub use document::{EntryDocument, MarkerClass, NodeId, POPUP_CLASS};
pub use events::{HoverEvent, HoverKind};
pub use popup::TooltipController;
