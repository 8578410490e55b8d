//! Locales and UI caption strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Supported locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(FolioError::UnknownLocale(other.to_string())),
        }
    }
}

/// Localized captions for the interactive components.
///
/// Components receive these as plain props; nothing reads a translation
/// table at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Hint on a collapsed expandable card
    pub expand_hint: &'static str,
    /// Close control in overlays and bottom sheets
    pub close: &'static str,
    /// Affordance row on clickable showcase cards
    pub see_details: &'static str,
    /// Progressive grid toggle, collapsed
    pub show_more: &'static str,
    /// Progressive grid toggle, expanded
    pub show_less: &'static str,
    /// Caption inside empty media placeholder slots
    pub add_media: &'static str,
}

/// Caption set for a locale.
pub fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::En => Labels {
            expand_hint: "Click for details",
            close: "Close",
            see_details: "See details",
            show_more: "Show more",
            show_less: "Show less",
            add_media: "Add media",
        },
        Locale::Fr => Labels {
            expand_hint: "Cliquez pour les détails",
            close: "Fermer",
            see_details: "Voir les détails",
            show_more: "Voir plus",
            show_less: "Voir moins",
            add_media: "Ajouter un média",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_locales_case_insensitively() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
    }

    #[test]
    fn rejects_unknown_locale() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert_eq!(err, FolioError::UnknownLocale("de".to_string()));
    }

    #[test]
    fn label_sets_are_complete_and_distinct() {
        let en = labels(Locale::En);
        let fr = labels(Locale::Fr);
        for set in [en, fr] {
            for caption in [
                set.expand_hint,
                set.close,
                set.see_details,
                set.show_more,
                set.show_less,
                set.add_media,
            ] {
                assert!(!caption.is_empty());
            }
        }
        assert_ne!(en.close, fr.close);
        assert_ne!(en.show_more, fr.show_more);
    }
}
