//! Content adjustments: scaling, typography and alignment.

use std::str::FromStr;

use super::PreferenceError;

/// Default value of every numeric content field, in percent.
pub const NUMERIC_DEFAULT: u32 = 100;

/// Usual increment applied by the stepper buttons.
pub const DEFAULT_STEP: i32 = 10;

/// Numeric content fields adjusted by +/- steppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    ContentScaling,
    FontSize,
    LineHeight,
    LetterSpacing,
}

impl NumericField {
    pub const ALL: [NumericField; 4] = [
        NumericField::ContentScaling,
        NumericField::FontSize,
        NumericField::LineHeight,
        NumericField::LetterSpacing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericField::ContentScaling => "content-scaling",
            NumericField::FontSize => "font-size",
            NumericField::LineHeight => "line-height",
            NumericField::LetterSpacing => "letter-spacing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumericField::ContentScaling => "Content Scaling",
            NumericField::FontSize => "Adjust Font Sizing",
            NumericField::LineHeight => "Adjust Line Height",
            NumericField::LetterSpacing => "Adjust Letter Spacing",
        }
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NumericField {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownField(s.to_string()))
    }
}

/// Boolean content fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentToggle {
    ReadableFont,
    HighlightTitles,
    HighlightLinks,
    TextMagnifier,
}

impl ContentToggle {
    pub const ALL: [ContentToggle; 4] = [
        ContentToggle::ReadableFont,
        ContentToggle::HighlightTitles,
        ContentToggle::HighlightLinks,
        ContentToggle::TextMagnifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentToggle::ReadableFont => "readable-font",
            ContentToggle::HighlightTitles => "highlight-titles",
            ContentToggle::HighlightLinks => "highlight-links",
            ContentToggle::TextMagnifier => "text-magnifier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentToggle::ReadableFont => "Readable Font",
            ContentToggle::HighlightTitles => "Highlight Titles",
            ContentToggle::HighlightLinks => "Highlight Links",
            ContentToggle::TextMagnifier => "Text Magnifier",
        }
    }
}

impl std::fmt::Display for ContentToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentToggle {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentToggle::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownField(s.to_string()))
    }
}

/// Text alignment. Always exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alignment::ALL
            .into_iter()
            .find(|align| align.as_str() == s)
            .ok_or_else(|| PreferenceError::unknown_value("alignment", s))
    }
}

/// Content adjustment values.
///
/// Numeric fields are percentages of the page's own value and are unsigned,
/// so they can never drop below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentAdjustments {
    pub content_scaling: u32,
    pub readable_font: bool,
    pub highlight_titles: bool,
    pub highlight_links: bool,
    pub text_magnifier: bool,
    pub font_size: u32,
    pub alignment: Alignment,
    pub line_height: u32,
    pub letter_spacing: u32,
}

impl Default for ContentAdjustments {
    fn default() -> Self {
        Self {
            content_scaling: NUMERIC_DEFAULT,
            readable_font: false,
            highlight_titles: false,
            highlight_links: false,
            text_magnifier: false,
            font_size: NUMERIC_DEFAULT,
            alignment: Alignment::Left,
            line_height: NUMERIC_DEFAULT,
            letter_spacing: NUMERIC_DEFAULT,
        }
    }
}

impl ContentAdjustments {
    /// Current value of a numeric field.
    pub fn numeric(&self, field: NumericField) -> u32 {
        match field {
            NumericField::ContentScaling => self.content_scaling,
            NumericField::FontSize => self.font_size,
            NumericField::LineHeight => self.line_height,
            NumericField::LetterSpacing => self.letter_spacing,
        }
    }

    fn numeric_mut(&mut self, field: NumericField) -> &mut u32 {
        match field {
            NumericField::ContentScaling => &mut self.content_scaling,
            NumericField::FontSize => &mut self.font_size,
            NumericField::LineHeight => &mut self.line_height,
            NumericField::LetterSpacing => &mut self.letter_spacing,
        }
    }

    /// Add `delta` to a numeric field, clamping at zero. Returns the new value.
    pub fn adjust(&mut self, field: NumericField, delta: i32) -> u32 {
        let slot = self.numeric_mut(field);
        *slot = slot.saturating_add_signed(delta);
        *slot
    }

    /// Restore a numeric field to its default.
    pub fn reset(&mut self, field: NumericField) {
        *self.numeric_mut(field) = NUMERIC_DEFAULT;
    }

    /// Current value of a boolean field.
    pub fn flag(&self, field: ContentToggle) -> bool {
        match field {
            ContentToggle::ReadableFont => self.readable_font,
            ContentToggle::HighlightTitles => self.highlight_titles,
            ContentToggle::HighlightLinks => self.highlight_links,
            ContentToggle::TextMagnifier => self.text_magnifier,
        }
    }

    /// Flip a boolean field and return its new state.
    pub fn toggle(&mut self, field: ContentToggle) -> bool {
        let slot = match field {
            ContentToggle::ReadableFont => &mut self.readable_font,
            ContentToggle::HighlightTitles => &mut self.highlight_titles,
            ContentToggle::HighlightLinks => &mut self.highlight_links,
            ContentToggle::TextMagnifier => &mut self.text_magnifier,
        };
        *slot = !*slot;
        *slot
    }

    /// Number of fields that differ from their default.
    pub fn changed_count(&self) -> usize {
        let numeric = NumericField::ALL
            .into_iter()
            .filter(|f| self.numeric(*f) != NUMERIC_DEFAULT)
            .count();
        let flags = ContentToggle::ALL
            .into_iter()
            .filter(|f| self.flag(*f))
            .count();
        numeric + flags + usize::from(self.alignment != Alignment::default())
    }
}
