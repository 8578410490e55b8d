//! Locale context for the folio app.
//!
//! The locale is chosen once at launch and provided from the root component;
//! pages read it here and hand plain label/data props down to the
//! interactive components, which never touch context themselves.

use dioxus::prelude::*;
use folio_core::{labels, Labels, Locale};

/// Hook to access the active locale from context.
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}

/// Hook returning the caption set for the active locale.
pub fn use_labels() -> Labels {
    labels(use_locale()())
}
