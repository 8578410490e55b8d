//! Portfolio content model.
//!
//! Content records are immutable, externally supplied data. They carry no
//! behavior beyond small display-policy helpers (media slot layout).

use serde::{Deserialize, Serialize};

/// Number of media placeholder slots an overlay renders for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSlots {
    /// Single full-width media area
    One,
    /// Side-by-side pair, second slot dimmed
    Two,
    /// One large primary slot (2×2) plus five dimmed secondary slots
    Six,
}

impl MediaSlots {
    pub fn count(self) -> usize {
        match self {
            MediaSlots::One => 1,
            MediaSlots::Two => 2,
            MediaSlots::Six => 6,
        }
    }

    /// Per-slot opacity ramp, primary first. Later slots fade out to signal
    /// room for more media without implying completed content.
    pub fn opacities(self) -> &'static [f32] {
        match self {
            MediaSlots::One => &[1.0],
            MediaSlots::Two => &[1.0, 0.7],
            MediaSlots::Six => &[1.0, 0.75, 0.6, 0.5, 0.4, 0.3],
        }
    }

    /// How many slots stay visible on a compact viewport.
    pub fn compact_visible(self) -> usize {
        self.count().min(2)
    }
}

impl Default for MediaSlots {
    fn default() -> Self {
        MediaSlots::One
    }
}

/// Icon rendered inside a media placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaIcon {
    Eye,
    Play,
    Shield,
}

impl Default for MediaIcon {
    fn default() -> Self {
        MediaIcon::Eye
    }
}

/// Visual treatment of a record's media area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStyle {
    /// CSS background token, e.g. `var(--media-aurora)`
    pub background: String,
    pub slots: MediaSlots,
    pub icon: MediaIcon,
}

impl MediaStyle {
    pub fn new(background: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            slots: MediaSlots::default(),
            icon: MediaIcon::default(),
        }
    }

    pub fn slots(mut self, slots: MediaSlots) -> Self {
        self.slots = slots;
        self
    }

    pub fn icon(mut self, icon: MediaIcon) -> Self {
        self.icon = icon;
        self
    }
}

/// One immutable portfolio content item: an experience entry, a showcase
/// project, or an other-work card.
///
/// `details` is an ordered sequence of paragraphs and may be empty; `tags`
/// render in insertion order. Records with `clickable == false` are
/// display-only and never open an overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique identifier within its section
    pub key: String,
    pub title: String,
    /// Secondary line under the title (organization name), if any
    pub subtitle: Option<String>,
    /// Date range caption, if any
    pub period: Option<String>,
    pub summary: String,
    pub details: Vec<String>,
    pub tags: Vec<String>,
    pub media: MediaStyle,
    pub clickable: bool,
}

impl ContentRecord {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            subtitle: None,
            period: None,
            summary: summary.into(),
            details: Vec::new(),
            tags: Vec::new(),
            media: MediaStyle::new("var(--media-neutral)"),
            clickable: true,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn media(mut self, media: MediaStyle) -> Self {
        self.media = media;
        self
    }

    pub fn display_only(mut self) -> Self {
        self.clickable = false;
        self
    }

    /// Whether the record carries any detail paragraphs.
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_counts_match_variant() {
        assert_eq!(MediaSlots::One.count(), 1);
        assert_eq!(MediaSlots::Two.count(), 2);
        assert_eq!(MediaSlots::Six.count(), 6);
    }

    #[test]
    fn opacity_ramp_covers_every_slot() {
        for slots in [MediaSlots::One, MediaSlots::Two, MediaSlots::Six] {
            assert_eq!(slots.opacities().len(), slots.count());
        }
    }

    #[test]
    fn opacity_ramp_starts_full_and_strictly_decreases() {
        for slots in [MediaSlots::One, MediaSlots::Two, MediaSlots::Six] {
            let ramp = slots.opacities();
            assert_eq!(ramp[0], 1.0);
            for pair in ramp.windows(2) {
                assert!(pair[1] < pair[0], "ramp not decreasing: {ramp:?}");
            }
        }
    }

    #[test]
    fn compact_viewport_shows_at_most_two_slots() {
        assert_eq!(MediaSlots::One.compact_visible(), 1);
        assert_eq!(MediaSlots::Two.compact_visible(), 2);
        assert_eq!(MediaSlots::Six.compact_visible(), 2);
    }

    #[test]
    fn builder_defaults() {
        let record = ContentRecord::new("k", "Title", "Summary");
        assert!(record.clickable);
        assert!(!record.has_details());
        assert!(record.tags.is_empty());
        assert_eq!(record.media.slots, MediaSlots::One);
    }

    #[test]
    fn display_only_clears_clickable() {
        let record = ContentRecord::new("k", "Title", "Summary").display_only();
        assert!(!record.clickable);
    }

    #[test]
    fn records_deserialize_from_external_json() {
        let raw = r#"{
            "key": "ext",
            "title": "External",
            "subtitle": null,
            "period": null,
            "summary": "Supplied by a content layer",
            "details": ["One paragraph"],
            "tags": ["Data"],
            "media": { "background": "var(--media-tide)", "slots": "Two", "icon": "Eye" },
            "clickable": false
        }"#;
        let record: ContentRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.key, "ext");
        assert_eq!(record.media.slots, MediaSlots::Two);
        assert!(!record.clickable);
    }

    #[test]
    fn details_preserve_paragraph_order() {
        let record = ContentRecord::new("k", "T", "S").details(["first", "second", "third"]);
        assert_eq!(record.details, ["first", "second", "third"]);
        assert!(record.has_details());
    }
}
