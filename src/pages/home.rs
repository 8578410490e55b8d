//! The single portfolio page.
//!
//! Static sections rendered from the locale catalog; all interactive
//! behavior lives in the components.

use dioxus::prelude::*;
use folio_core::catalog;

use crate::components::{DisclosureCard, ProgressiveGrid, ShowcaseSection};
use crate::context::{use_labels, use_locale};

#[component]
pub fn Home() -> Element {
    let locale = use_locale();
    let labels = use_labels();
    let catalog = catalog(locale());

    rsx! {
        main { class: "page",
            // Hero
            section { class: "hero", id: "top",
                h1 { class: "hero-name",
                    "Ava "
                    span { class: "accent", "LINDQVIST" }
                }
                p { class: "hero-subtitle", "{catalog.headings.hero_subtitle}" }
                div { class: "hero-ctas",
                    a { class: "glass-card cta", href: "#experience",
                        "{catalog.headings.experience}"
                    }
                    a { class: "glass-card cta", href: "#showcase",
                        span { class: "accent", "{catalog.headings.showcase}" }
                    }
                }
            }

            // Experience timeline
            section { class: "section", id: "experience",
                h2 { class: "section-title",
                    "{catalog.headings.experience} "
                    span { class: "accent", "{catalog.headings.experience_accent}" }
                }
                div { class: "timeline",
                    for record in &catalog.experience {
                        DisclosureCard {
                            key: "{record.key}",
                            record: record.clone(),
                            expandable: record.has_details(),
                            labels,
                        }
                    }
                }
            }

            // Showcase with overlay
            section { class: "section", id: "showcase",
                h2 { class: "section-title",
                    "{catalog.headings.showcase} "
                    span { class: "accent", "{catalog.headings.showcase_accent}" }
                }
                ShowcaseSection {
                    primary: catalog.showcase.primary.clone(),
                    overflow: catalog.showcase.overflow.clone(),
                    labels,
                }
            }

            // Other realizations, display-only cards
            section { class: "section", id: "other-work",
                h2 { class: "section-title",
                    "{catalog.headings.other_work} "
                    span { class: "accent", "{catalog.headings.other_work_accent}" }
                }
                ProgressiveGrid {
                    primary: catalog.other_work.primary.clone(),
                    overflow: catalog.other_work.overflow.clone(),
                    labels,
                }
            }
        }
    }
}
