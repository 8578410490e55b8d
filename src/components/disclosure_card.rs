//! Disclosure card component.
//!
//! A content card that reveals its detail paragraphs either in place
//! (regular viewports, height-animated) or as a bottom sheet (compact
//! viewports). The transition logic lives in `folio_core::disclosure`;
//! this file is the presentation of that state machine.

use dioxus::prelude::*;
use folio_core::{ContentRecord, DisclosureState, Labels};

use super::icons::chevron_down;
use super::viewport::use_viewport_class;

/// `grid-template-rows` value for the height-animated inline container.
fn inline_rows(state: DisclosureState) -> &'static str {
    if state == DisclosureState::ExpandedInline {
        "1fr"
    } else {
        "0fr"
    }
}

fn card_class(can_expand: bool) -> &'static str {
    if can_expand {
        "glass-card disclosure-card expandable"
    } else {
        "glass-card disclosure-card"
    }
}

/// Expandable experience card.
///
/// A record without detail paragraphs degrades to non-expandable even when
/// `expandable` is set: the card renders its summary and ignores activation.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     DisclosureCard {
///         record: record.clone(),
///         expandable: true,
///         labels: labels,
///     }
/// }
/// ```
#[component]
pub fn DisclosureCard(
    /// Content to render
    record: ContentRecord,
    /// Whether the card offers disclosure at all
    #[props(default = false)]
    expandable: bool,
    /// Localized captions
    labels: Labels,
) -> Element {
    let viewport = use_viewport_class();
    let mut state = use_signal(DisclosureState::default);

    // Silent degrade: no details means nothing to disclose.
    let can_expand = expandable && record.has_details();

    // Viewport class is read at toggle time, not at render time, so a
    // breakpoint crossing never retargets an already-open expansion.
    let on_click = move |_| state.set(state().toggled(viewport(), can_expand));

    let on_keydown = move |evt: KeyboardEvent| {
        if !can_expand {
            return;
        }
        match evt.key() {
            Key::Enter => {
                evt.prevent_default();
                state.set(state().toggled(viewport(), true));
            }
            Key::Character(c) if c == " " => {
                evt.prevent_default();
                state.set(state().toggled(viewport(), true));
            }
            _ => {}
        }
    };

    let rows = inline_rows(state());

    rsx! {
        div { class: "experience-item",
            div { class: "timeline-dot" }

            div {
                class: card_class(can_expand),
                onclick: on_click,
                onkeydown: on_keydown,
                role: if can_expand { "button" },
                tabindex: if can_expand { "0" },
                aria_expanded: if can_expand { state().is_expanded() },

                div { class: "disclosure-head",
                    div {
                        h3 { class: "disclosure-title", "{record.title}" }
                        if let Some(subtitle) = &record.subtitle {
                            p { class: "disclosure-subtitle", "{subtitle}" }
                        }
                    }
                    if let Some(period) = &record.period {
                        span { class: "disclosure-period", "{period}" }
                    }
                }

                p { class: "disclosure-summary", "{record.summary}" }

                if can_expand && state() == DisclosureState::Collapsed {
                    div { class: "expand-hint",
                        {chevron_down(14)}
                        span { "{labels.expand_hint}" }
                    }
                }

                // Inline expansion, 0 -> natural height via grid rows
                if can_expand {
                    div {
                        class: "expand-grid",
                        style: "grid-template-rows: {rows};",
                        div { class: "expand-clip",
                            div { class: "expand-body",
                                for paragraph in &record.details {
                                    p { class: "detail-text", "{paragraph}" }
                                }
                            }
                        }
                    }
                }

                div { class: "tag-row",
                    for tag in &record.tags {
                        span { class: "skill-tag", "{tag}" }
                    }
                }
            }
        }

        // Bottom sheet, compact viewports only
        if state() == DisclosureState::ExpandedOverlay {
            div {
                class: "sheet-layer",
                onclick: move |_| state.set(state().dismissed()),

                div { class: "sheet-backdrop" }

                div {
                    class: "bottom-sheet",
                    onclick: move |e| e.stop_propagation(),

                    div { class: "sheet-grip" }

                    div { class: "disclosure-head",
                        div {
                            h3 { class: "disclosure-title", "{record.title}" }
                            if let Some(subtitle) = &record.subtitle {
                                p { class: "disclosure-subtitle", "{subtitle}" }
                            }
                            if let Some(period) = &record.period {
                                span { class: "disclosure-period", "{period}" }
                            }
                        }
                    }

                    for paragraph in &record.details {
                        p { class: "detail-text", "{paragraph}" }
                    }

                    div { class: "tag-row",
                        for tag in &record.tags {
                            span { class: "skill-tag", "{tag}" }
                        }
                    }

                    button {
                        class: "sheet-close",
                        onclick: move |_| state.set(state().dismissed()),
                        "{labels.close}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_container_opens_only_when_expanded_inline() {
        assert_eq!(inline_rows(DisclosureState::Collapsed), "0fr");
        assert_eq!(inline_rows(DisclosureState::ExpandedInline), "1fr");
        // The bottom sheet replaces inline expansion, never combines with it.
        assert_eq!(inline_rows(DisclosureState::ExpandedOverlay), "0fr");
    }

    #[test]
    fn expandable_cards_get_the_pointer_affordance() {
        assert_eq!(card_class(true), "glass-card disclosure-card expandable");
        assert_eq!(card_class(false), "glass-card disclosure-card");
    }
}
