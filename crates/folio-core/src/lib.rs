//! Folio Core Library
//!
//! Renderer-independent logic and data for the folio portfolio app:
//! content records, the localized content catalog, and the small interaction
//! state machines driving responsive disclosure and overlay presentation.
//!
//! ## Overview
//!
//! The UI crate is a thin declarative layer; everything with actual behavior
//! lives here so it can be exercised without a webview:
//!
//! - [`ViewportClass`]: compact vs regular breakpoint classification
//! - [`DisclosureState`]: collapsed / inline / bottom-sheet card state
//! - [`OverlayState`]: the at-most-one-active overlay key
//! - [`RevealState`]: show-more gating for overflow grids
//! - [`ContentRecord`]: immutable portfolio content items
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{catalog, DisclosureState, Locale, ViewportClass};
//!
//! let catalog = catalog(Locale::En);
//! let state = DisclosureState::Collapsed.toggled(ViewportClass::Regular, true);
//! assert_eq!(state, DisclosureState::ExpandedInline);
//! assert!(!catalog.showcase.primary.is_empty());
//! ```

pub mod catalog;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod locale;
pub mod overlay;
pub mod reveal;
pub mod viewport;

// Re-exports
pub use catalog::{catalog, Catalog, Section};
pub use content::{ContentRecord, MediaIcon, MediaSlots, MediaStyle};
pub use disclosure::DisclosureState;
pub use error::FolioError;
pub use locale::{labels, Labels, Locale};
pub use overlay::OverlayState;
pub use reveal::RevealState;
pub use viewport::{ViewportClass, COMPACT_MAX_WIDTH};
