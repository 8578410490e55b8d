//! Progressive grid: a primary card grid plus a show-more overflow.

use dioxus::prelude::*;
use folio_core::{ContentRecord, Labels, RevealState};

use super::icons::chevron_down;
use super::showcase::ShowcaseCard;

/// `grid-template-rows` value for the height-animated overflow container.
fn overflow_rows(reveal: RevealState) -> &'static str {
    if reveal.is_expanded() {
        "1fr"
    } else {
        "0fr"
    }
}

fn chevron_rotation(reveal: RevealState) -> &'static str {
    if reveal.is_expanded() {
        "rotate(180deg)"
    } else {
        "rotate(0deg)"
    }
}

fn toggle_label(reveal: RevealState, labels: &Labels) -> &'static str {
    if reveal.is_expanded() {
        labels.show_less
    } else {
        labels.show_more
    }
}

/// Card grid with an optionally revealed overflow subset.
///
/// The primary sequence always renders. When the overflow sequence is empty
/// the toggle control is omitted from the tree entirely, not hidden.
#[component]
pub fn ProgressiveGrid(
    /// Always-visible records
    primary: Vec<ContentRecord>,
    /// Records gated behind the show-more toggle
    overflow: Vec<ContentRecord>,
    /// Localized captions
    labels: Labels,
    /// Open handler forwarded to clickable cards
    #[props(default = None)]
    on_open: Option<EventHandler<String>>,
) -> Element {
    let mut reveal = use_signal(RevealState::new);

    let rows = overflow_rows(reveal());
    let rotation = chevron_rotation(reveal());
    let caption = toggle_label(reveal(), &labels);

    rsx! {
        div { class: "card-grid",
            for record in &primary {
                ShowcaseCard {
                    key: "{record.key}",
                    record: record.clone(),
                    labels,
                    on_open,
                }
            }
        }

        if reveal().shows_toggle(overflow.len()) {
            div {
                class: "expand-grid overflow-reveal",
                style: "grid-template-rows: {rows};",
                div { class: "expand-clip",
                    div { class: "card-grid",
                        for record in &overflow {
                            ShowcaseCard {
                                key: "{record.key}",
                                record: record.clone(),
                                labels,
                                on_open,
                            }
                        }
                    }
                }
            }

            button {
                class: "show-more-toggle",
                onclick: move |_| reveal.write().toggle(),
                "{caption}"
                span {
                    class: "chevron",
                    style: "transform: {rotation};",
                    {chevron_down(16)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{labels as locale_labels, Locale};

    #[test]
    fn overflow_container_tracks_reveal_state() {
        let mut reveal = RevealState::new();
        assert_eq!(overflow_rows(reveal), "0fr");
        reveal.toggle();
        assert_eq!(overflow_rows(reveal), "1fr");
    }

    #[test]
    fn chevron_flips_when_expanded() {
        let mut reveal = RevealState::new();
        assert_eq!(chevron_rotation(reveal), "rotate(0deg)");
        reveal.toggle();
        assert_eq!(chevron_rotation(reveal), "rotate(180deg)");
    }

    #[test]
    fn toggle_label_tracks_reveal_state() {
        let labels = locale_labels(Locale::En);
        let mut reveal = RevealState::new();
        assert_eq!(toggle_label(reveal, &labels), labels.show_more);
        reveal.toggle();
        assert_eq!(toggle_label(reveal, &labels), labels.show_less);
    }
}
