//! Color constants for the folio glass aesthetic.

#![allow(dead_code)]

// === Backgrounds ===
pub const BG_BASE: &str = "#0b0d12";
pub const GLASS_BG: &str = "rgba(255, 255, 255, 0.04)";
pub const GLASS_BG_HOVER: &str = "rgba(255, 255, 255, 0.07)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.1)";

// === Text ===
pub const TEXT_PRIMARY: &str = "#f4f6fb";
pub const TEXT_SECONDARY: &str = "rgba(244, 246, 251, 0.72)";
pub const TEXT_TERTIARY: &str = "rgba(244, 246, 251, 0.55)";
pub const TEXT_MUTED: &str = "rgba(244, 246, 251, 0.4)";

// === Accent ===
pub const ACCENT_FROM: &str = "#8b5cf6";
pub const ACCENT_TO: &str = "#22d3ee";

// === Media placeholder gradients ===
pub const MEDIA_AURORA: &str = "linear-gradient(135deg, #312e81, #155e75)";
pub const MEDIA_TIDE: &str = "linear-gradient(135deg, #0c4a6e, #134e4a)";
pub const MEDIA_EMBER: &str = "linear-gradient(135deg, #7c2d12, #831843)";
pub const MEDIA_MOSS: &str = "linear-gradient(135deg, #14532d, #1e3a5f)";
pub const MEDIA_VIOLET: &str = "linear-gradient(135deg, #4c1d95, #701a75)";
pub const MEDIA_NEUTRAL: &str = "linear-gradient(135deg, #1e293b, #334155)";
