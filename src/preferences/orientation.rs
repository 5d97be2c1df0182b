//! Orientation adjustments: page behaviour aids and cursor size.

use std::str::FromStr;

use super::PreferenceError;

/// Boolean orientation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientationToggle {
    MuteSounds,
    HideImages,
    ReadMode,
    ReadingGuide,
    StopAnimations,
    ReadingMask,
    HighlightHover,
    HighlightFocus,
    BigBlackCursor,
    BigWhiteCursor,
}

impl OrientationToggle {
    pub const ALL: [OrientationToggle; 10] = [
        OrientationToggle::MuteSounds,
        OrientationToggle::HideImages,
        OrientationToggle::ReadMode,
        OrientationToggle::ReadingGuide,
        OrientationToggle::StopAnimations,
        OrientationToggle::ReadingMask,
        OrientationToggle::HighlightHover,
        OrientationToggle::HighlightFocus,
        OrientationToggle::BigBlackCursor,
        OrientationToggle::BigWhiteCursor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationToggle::MuteSounds => "mute-sounds",
            OrientationToggle::HideImages => "hide-images",
            OrientationToggle::ReadMode => "read-mode",
            OrientationToggle::ReadingGuide => "reading-guide",
            OrientationToggle::StopAnimations => "stop-animations",
            OrientationToggle::ReadingMask => "reading-mask",
            OrientationToggle::HighlightHover => "highlight-hover",
            OrientationToggle::HighlightFocus => "highlight-focus",
            OrientationToggle::BigBlackCursor => "big-black-cursor",
            OrientationToggle::BigWhiteCursor => "big-white-cursor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrientationToggle::MuteSounds => "Mute Sounds",
            OrientationToggle::HideImages => "Hide Images",
            OrientationToggle::ReadMode => "Read Mode",
            OrientationToggle::ReadingGuide => "Reading Guide",
            OrientationToggle::StopAnimations => "Stop Animations",
            OrientationToggle::ReadingMask => "Reading Mask",
            OrientationToggle::HighlightHover => "Highlight Hover",
            OrientationToggle::HighlightFocus => "Highlight Focus",
            OrientationToggle::BigBlackCursor => "Big Black Cursor",
            OrientationToggle::BigWhiteCursor => "Big White Cursor",
        }
    }

    /// The field that cannot be on at the same time as this one.
    pub fn exclusive_with(&self) -> Option<OrientationToggle> {
        match self {
            OrientationToggle::BigBlackCursor => Some(OrientationToggle::BigWhiteCursor),
            OrientationToggle::BigWhiteCursor => Some(OrientationToggle::BigBlackCursor),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrientationToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrientationToggle {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrientationToggle::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownField(s.to_string()))
    }
}

/// Shortcut link offered by the "useful links" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsefulLink {
    Sitemap,
    Contact,
    Help,
}

impl UsefulLink {
    pub const ALL: [UsefulLink; 3] = [UsefulLink::Sitemap, UsefulLink::Contact, UsefulLink::Help];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsefulLink::Sitemap => "sitemap",
            UsefulLink::Contact => "contact",
            UsefulLink::Help => "help",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UsefulLink::Sitemap => "Sitemap",
            UsefulLink::Contact => "Contact",
            UsefulLink::Help => "Help",
        }
    }

    /// Parse a selector value. An empty selection means no link.
    pub fn parse_selection(value: &str) -> Result<Option<UsefulLink>, PreferenceError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl std::fmt::Display for UsefulLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UsefulLink {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsefulLink::ALL
            .into_iter()
            .find(|link| link.as_str() == s)
            .ok_or_else(|| PreferenceError::unknown_value("useful-link", s))
    }
}

/// Orientation adjustment values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrientationAdjustments {
    pub mute_sounds: bool,
    pub hide_images: bool,
    pub read_mode: bool,
    pub reading_guide: bool,
    pub stop_animations: bool,
    pub reading_mask: bool,
    pub highlight_hover: bool,
    pub highlight_focus: bool,
    pub big_black_cursor: bool,
    pub big_white_cursor: bool,
    pub useful_link: Option<UsefulLink>,
}

impl OrientationAdjustments {
    pub fn flag(&self, field: OrientationToggle) -> bool {
        match field {
            OrientationToggle::MuteSounds => self.mute_sounds,
            OrientationToggle::HideImages => self.hide_images,
            OrientationToggle::ReadMode => self.read_mode,
            OrientationToggle::ReadingGuide => self.reading_guide,
            OrientationToggle::StopAnimations => self.stop_animations,
            OrientationToggle::ReadingMask => self.reading_mask,
            OrientationToggle::HighlightHover => self.highlight_hover,
            OrientationToggle::HighlightFocus => self.highlight_focus,
            OrientationToggle::BigBlackCursor => self.big_black_cursor,
            OrientationToggle::BigWhiteCursor => self.big_white_cursor,
        }
    }

    fn flag_mut(&mut self, field: OrientationToggle) -> &mut bool {
        match field {
            OrientationToggle::MuteSounds => &mut self.mute_sounds,
            OrientationToggle::HideImages => &mut self.hide_images,
            OrientationToggle::ReadMode => &mut self.read_mode,
            OrientationToggle::ReadingGuide => &mut self.reading_guide,
            OrientationToggle::StopAnimations => &mut self.stop_animations,
            OrientationToggle::ReadingMask => &mut self.reading_mask,
            OrientationToggle::HighlightHover => &mut self.highlight_hover,
            OrientationToggle::HighlightFocus => &mut self.highlight_focus,
            OrientationToggle::BigBlackCursor => &mut self.big_black_cursor,
            OrientationToggle::BigWhiteCursor => &mut self.big_white_cursor,
        }
    }

    /// Flip a field and return its new state.
    ///
    /// The big cursors are exclusive: if the other cursor is on, it is
    /// switched off before this one is flipped.
    pub fn toggle(&mut self, field: OrientationToggle) -> bool {
        if let Some(other) = field.exclusive_with() {
            if self.flag(other) {
                *self.flag_mut(other) = false;
            }
        }
        let slot = self.flag_mut(field);
        *slot = !*slot;
        *slot
    }

    /// Number of fields that differ from their default.
    pub fn changed_count(&self) -> usize {
        OrientationToggle::ALL
            .into_iter()
            .filter(|f| self.flag(*f))
            .count()
            + usize::from(self.useful_link.is_some())
    }
}
