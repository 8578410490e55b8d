//! Viewport classifier hook.
//!
//! Seeds synchronously from the desktop window's logical width so the first
//! frame already renders the right layout, then follows the webview's
//! media-query crossings for the subscribing component's lifetime.

use dioxus::desktop::use_window;
use dioxus::document;
use dioxus::prelude::*;
use folio_core::ViewportClass;

/// Media-query subscription. The query only fires at breakpoint crossings,
/// so no debouncing happens on either side. The `finally` arm removes the
/// listener once the eval channel closes on component teardown.
const VIEWPORT_QUERY_JS: &str = r#"
    const query = window.matchMedia("(max-width: 767px)");
    const notify = () => dioxus.send(query.matches);
    notify();
    query.addEventListener("change", notify);
    try {
        await dioxus.recv();
    } finally {
        query.removeEventListener("change", notify);
    }
"#;

/// Track the current viewport class.
///
/// Each caller owns an independent subscription; duplicated subscriptions
/// across card instances are expected and cheap.
pub fn use_viewport_class() -> Signal<ViewportClass> {
    let window = use_window();
    let mut class = use_signal(move || {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        ViewportClass::from_width(size.width)
    });

    use_future(move || async move {
        let mut crossings = document::eval(VIEWPORT_QUERY_JS);
        while let Ok(compact) = crossings.recv::<bool>().await {
            let next = if compact {
                ViewportClass::Compact
            } else {
                ViewportClass::Regular
            };
            if class() != next {
                tracing::debug!("viewport crossed breakpoint: {next:?}");
                class.set(next);
            }
        }
    });

    class
}
