//! Showcase coordinator: cards, overflow grid, and the single overlay host.

use dioxus::prelude::*;
use folio_core::{ContentRecord, Labels, OverlayState};

use super::icons::{chevron_right, placeholder_icon};
use super::overlay_presenter::OverlayPresenter;
use super::progressive_grid::ProgressiveGrid;

fn card_shell_class(featured: bool, clickable: bool) -> String {
    let mut class = String::from("glass-card showcase-card");
    if featured {
        class.push_str(" featured");
    }
    if clickable {
        class.push_str(" clickable");
    }
    class
}

fn placeholder_class(featured: bool) -> &'static str {
    if featured {
        "media-placeholder aspect-wide"
    } else {
        "media-placeholder aspect-photo"
    }
}

/// A single showcase card.
///
/// Display-only records (or cards rendered without an open handler) are
/// inert: no pointer affordance, no see-details row, clicks do nothing.
#[component]
pub fn ShowcaseCard(
    record: ContentRecord,
    labels: Labels,
    #[props(default = false)] featured: bool,
    #[props(default = None)] on_open: Option<EventHandler<String>>,
) -> Element {
    let clickable = record.clickable && on_open.is_some();
    let open_key = record.key.clone();
    let open = move |_| {
        if !clickable {
            return;
        }
        if let Some(handler) = &on_open {
            handler.call(open_key.clone());
        }
    };

    rsx! {
        div {
            class: card_shell_class(featured, clickable),
            onclick: open,

            div {
                class: placeholder_class(featured),
                style: "background: {record.media.background};",
                div { class: "media-slot-caption",
                    {placeholder_icon(record.media.icon, if featured { 40 } else { 32 })}
                    p { "{labels.add_media}" }
                }
            }

            div { class: if featured { "showcase-body roomy" } else { "showcase-body" },
                h3 { class: if featured { "showcase-title large" } else { "showcase-title" },
                    "{record.title}"
                }
                p { class: "showcase-summary", "{record.summary}" }

                div { class: "tag-row",
                    for tag in &record.tags {
                        span { class: "skill-tag", "{tag}" }
                    }
                }

                if clickable {
                    div { class: "see-details",
                        span { "{labels.see_details}" }
                        {chevron_right(12)}
                    }
                }
            }
        }
    }
}

/// Showcase section coordinator.
///
/// Owns the overlay state: clicking any clickable card in the primary grid
/// or the revealed overflow activates that card's key, atomically replacing
/// whatever was active before. Every close path funnels into the same
/// idempotent clear. The first primary record renders featured.
#[component]
pub fn ShowcaseSection(
    primary: Vec<ContentRecord>,
    overflow: Vec<ContentRecord>,
    labels: Labels,
) -> Element {
    let mut overlay = use_signal(OverlayState::new);

    // Resolution runs against the union so overflow cards open too; unknown
    // or display-only keys fail closed.
    let all: Vec<ContentRecord> = primary.iter().chain(overflow.iter()).cloned().collect();
    let active = overlay().resolve(&all).cloned();

    let on_open = move |key: String| overlay.write().activate(key);

    let featured = primary.first().cloned();
    let grid: Vec<ContentRecord> = primary.iter().skip(1).cloned().collect();

    rsx! {
        if let Some(record) = featured {
            ShowcaseCard {
                record,
                labels,
                featured: true,
                on_open,
            }
        }

        ProgressiveGrid {
            primary: grid,
            overflow,
            labels,
            on_open,
        }

        OverlayPresenter {
            active,
            labels,
            on_close: move |_| overlay.write().clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_and_clickable_modify_the_shell_class() {
        assert_eq!(card_shell_class(false, false), "glass-card showcase-card");
        assert_eq!(
            card_shell_class(true, true),
            "glass-card showcase-card featured clickable"
        );
        assert_eq!(
            card_shell_class(false, true),
            "glass-card showcase-card clickable"
        );
    }

    #[test]
    fn featured_cards_use_the_wide_placeholder() {
        assert_eq!(placeholder_class(true), "media-placeholder aspect-wide");
        assert_eq!(placeholder_class(false), "media-placeholder aspect-photo");
    }
}
