//! Error types for folio

use thiserror::Error;

/// Main error type for folio operations.
///
/// The interaction core performs no I/O; the only fallible surface is
/// interpreting externally supplied configuration. Malformed content data
/// degrades silently instead of erroring (see `disclosure` and `overlay`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// Locale tag was not one of the supported locales
    #[error("Unknown locale: {0} (expected \"en\" or \"fr\")")]
    UnknownLocale(String),
}
