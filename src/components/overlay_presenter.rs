//! Overlay presenter.
//!
//! Hosts the full-viewport detail overlay for whichever record is active.
//! Scroll lock and the document-level Escape listener are owned by the
//! mounted panel and released on unmount, whichever way the unmount happens.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{ContentRecord, Labels, MediaSlots};

use super::icons::{close_icon, placeholder_icon};

/// Document-level Escape listener, attached only while the panel is mounted.
/// The `finally` arm detaches it when the eval channel closes on unmount.
const ESCAPE_LISTENER_JS: &str = r#"
    const onKeydown = (event) => {
        if (event.key === "Escape") dioxus.send(true);
    };
    document.addEventListener("keydown", onKeydown);
    try {
        await dioxus.recv();
    } finally {
        document.removeEventListener("keydown", onKeydown);
    }
"#;

fn media_grid_class(slots: MediaSlots) -> &'static str {
    match slots {
        MediaSlots::One => "media-grid media-grid--single",
        MediaSlots::Two => "media-grid media-grid--pair",
        MediaSlots::Six => "media-grid media-grid--six",
    }
}

/// Primary slot of the six-grid spans two columns and two rows.
fn media_slot_class(slots: MediaSlots, index: usize) -> &'static str {
    if slots == MediaSlots::Six && index == 0 {
        "media-slot media-slot--primary"
    } else {
        "media-slot"
    }
}

/// Overlay host.
///
/// With no active record this renders nothing at all; no hidden DOM is kept
/// around between openings. Swapping the active record while open replaces
/// the panel content in place, so exactly one overlay subtree ever exists.
#[component]
pub fn OverlayPresenter(
    /// Record to present, if any
    active: Option<ContentRecord>,
    /// Localized captions
    labels: Labels,
    /// Invoked on backdrop click, close button, or Escape
    on_close: EventHandler<()>,
) -> Element {
    match active {
        Some(record) => rsx! {
            OverlayPanel { record, labels, on_close }
        },
        None => rsx! {},
    }
}

/// The mounted overlay. Mount lifetime == open lifetime, which is what ties
/// the shared resources (scroll lock, Escape listener) to exactly one open
/// overlay.
#[component]
fn OverlayPanel(record: ContentRecord, labels: Labels, on_close: EventHandler<()>) -> Element {
    // Suspend page scroll while open; restore unconditionally on unmount,
    // including abrupt unmounts mid-interaction.
    use_hook(|| {
        let _ = document::eval("document.body.style.overflow = 'hidden';");
    });
    use_drop(|| {
        let _ = document::eval("document.body.style.overflow = '';");
    });

    use_future(move || async move {
        let mut escapes = document::eval(ESCAPE_LISTENER_JS);
        while let Ok(true) = escapes.recv::<bool>().await {
            on_close.call(());
        }
    });

    let slots = record.media.slots;

    rsx! {
        div { class: "overlay-layer",
            div {
                class: "overlay-backdrop",
                onclick: move |_| on_close.call(()),
            }

            div { class: "overlay-panel",
                button {
                    class: "overlay-close",
                    aria_label: "{labels.close}",
                    onclick: move |_| on_close.call(()),
                    {close_icon(16)}
                }

                div { class: media_grid_class(slots),
                    for (index, opacity) in slots.opacities().iter().enumerate() {
                        div {
                            class: media_slot_class(slots, index),
                            style: "background: {record.media.background}; opacity: {opacity};",
                            div { class: "media-slot-caption",
                                {placeholder_icon(record.media.icon, if index == 0 { 40 } else { 24 })}
                                p { "{labels.add_media}" }
                            }
                        }
                    }
                }

                div { class: "overlay-content",
                    h3 { class: "overlay-title", "{record.title}" }
                    p { class: "overlay-summary", "{record.summary}" }

                    if record.has_details() {
                        div { class: "overlay-details",
                            for paragraph in &record.details {
                                p { class: "detail-text", "{paragraph}" }
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_class_follows_slot_count() {
        assert_eq!(media_grid_class(MediaSlots::One), "media-grid media-grid--single");
        assert_eq!(media_grid_class(MediaSlots::Two), "media-grid media-grid--pair");
        assert_eq!(media_grid_class(MediaSlots::Six), "media-grid media-grid--six");
    }

    #[test]
    fn only_the_six_grid_has_a_primary_slot() {
        assert_eq!(media_slot_class(MediaSlots::Six, 0), "media-slot media-slot--primary");
        assert_eq!(media_slot_class(MediaSlots::Six, 1), "media-slot");
        assert_eq!(media_slot_class(MediaSlots::Two, 0), "media-slot");
        assert_eq!(media_slot_class(MediaSlots::One, 0), "media-slot");
    }

    #[test]
    fn pair_grid_dims_its_second_slot() {
        let ramp = MediaSlots::Two.opacities();
        assert_eq!(ramp[0], 1.0);
        assert!(ramp[1] < 1.0);
    }
}
