//! UI components for the folio app.

pub mod disclosure_card;
pub mod icons;
pub mod overlay_presenter;
pub mod progressive_grid;
pub mod showcase;
pub mod viewport;

pub use disclosure_card::DisclosureCard;
pub use overlay_presenter::OverlayPresenter;
pub use progressive_grid::ProgressiveGrid;
pub use showcase::{ShowcaseCard, ShowcaseSection};
pub use viewport::use_viewport_class;
