use dioxus::prelude::*;
use folio_core::Locale;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The portfolio is a single page; in-page movement is anchor scrolling only.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles and the locale context.
#[component]
pub fn App() -> Element {
    let locale: Signal<Locale> = use_signal(crate::initial_locale);
    use_context_provider(|| locale);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
