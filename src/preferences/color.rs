//! Color adjustments: contrast, saturation and custom colors.

use std::str::FromStr;

use egui::Color32;

use super::PreferenceError;

/// Suggested swatches offered by the color pickers. The store accepts any
/// color, not only these.
pub const SWATCHES: [Color32; 8] = [
    Color32::from_rgb(0x3B, 0x82, 0xF6),
    Color32::from_rgb(0x8B, 0x5C, 0xF6),
    Color32::from_rgb(0xEF, 0x44, 0x44),
    Color32::from_rgb(0xF9, 0x73, 0x16),
    Color32::from_rgb(0x14, 0xB8, 0xA6),
    Color32::from_rgb(0x84, 0xCC, 0x16),
    Color32::from_rgb(0xFF, 0xFF, 0xFF),
    Color32::from_rgb(0x00, 0x00, 0x00),
];

/// Contrast mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contrast {
    Dark,
    Light,
    High,
}

impl Contrast {
    pub const ALL: [Contrast; 3] = [Contrast::Dark, Contrast::Light, Contrast::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Contrast::Dark => "dark",
            Contrast::Light => "light",
            Contrast::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Contrast::Dark => "Dark Contrast",
            Contrast::Light => "Light Contrast",
            Contrast::High => "High Contrast",
        }
    }
}

impl std::fmt::Display for Contrast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Contrast {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Contrast::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PreferenceError::unknown_value("contrast", s))
    }
}

/// Saturation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Saturation {
    High,
    Monochrome,
    Low,
}

impl Saturation {
    pub const ALL: [Saturation; 3] = [Saturation::High, Saturation::Monochrome, Saturation::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Saturation::High => "high",
            Saturation::Monochrome => "monochrome",
            Saturation::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Saturation::High => "High Saturation",
            Saturation::Monochrome => "Monochrome",
            Saturation::Low => "Low Saturation",
        }
    }
}

impl std::fmt::Display for Saturation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Saturation {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Saturation::ALL
            .into_iter()
            .find(|sat| sat.as_str() == s)
            .ok_or_else(|| PreferenceError::unknown_value("saturation", s))
    }
}

/// Which custom color a picker writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Text,
    Title,
    Background,
}

impl ColorTarget {
    pub const ALL: [ColorTarget; 3] = [ColorTarget::Text, ColorTarget::Title, ColorTarget::Background];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTarget::Text => "text",
            ColorTarget::Title => "title",
            ColorTarget::Background => "background",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorTarget::Text => "Adjust Text Colors",
            ColorTarget::Title => "Adjust Title Colors",
            ColorTarget::Background => "Adjust Background Colors",
        }
    }

    /// Color this target starts with.
    pub fn default_color(&self) -> Color32 {
        match self {
            ColorTarget::Text | ColorTarget::Title => Color32::BLACK,
            ColorTarget::Background => Color32::WHITE,
        }
    }
}

impl std::fmt::Display for ColorTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorTarget {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTarget::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownField(s.to_string()))
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) hex string.
pub fn parse_hex_color(input: &str) -> Result<Color32, PreferenceError> {
    let invalid = || PreferenceError::InvalidColor(input.to_string());
    let hex = input.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Color32::from_rgb(r, g, b)),
        _ => Err(invalid()),
    }
}

/// Format a color as `#rrggbb`.
pub fn format_hex_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Select `value`, or clear the slot if `value` is already selected.
fn toggle_choice<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

/// Color adjustment values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAdjustments {
    pub contrast: Option<Contrast>,
    pub saturation: Option<Saturation>,
    pub text_color: Color32,
    pub title_color: Color32,
    pub background_color: Color32,
}

impl Default for ColorAdjustments {
    fn default() -> Self {
        Self {
            contrast: None,
            saturation: None,
            text_color: ColorTarget::Text.default_color(),
            title_color: ColorTarget::Title.default_color(),
            background_color: ColorTarget::Background.default_color(),
        }
    }
}

impl ColorAdjustments {
    /// Select a contrast mode; selecting the active mode clears it.
    pub fn select_contrast(&mut self, value: Contrast) -> Option<Contrast> {
        toggle_choice(&mut self.contrast, value);
        self.contrast
    }

    /// Select a saturation mode; selecting the active mode clears it.
    pub fn select_saturation(&mut self, value: Saturation) -> Option<Saturation> {
        toggle_choice(&mut self.saturation, value);
        self.saturation
    }

    pub fn color(&self, target: ColorTarget) -> Color32 {
        match target {
            ColorTarget::Text => self.text_color,
            ColorTarget::Title => self.title_color,
            ColorTarget::Background => self.background_color,
        }
    }

    pub fn set_color(&mut self, target: ColorTarget, color: Color32) {
        match target {
            ColorTarget::Text => self.text_color = color,
            ColorTarget::Title => self.title_color = color,
            ColorTarget::Background => self.background_color = color,
        }
    }

    /// Number of fields that differ from their default.
    pub fn changed_count(&self) -> usize {
        let colors = ColorTarget::ALL
            .into_iter()
            .filter(|t| self.color(*t) != t.default_color())
            .count();
        colors + usize::from(self.contrast.is_some()) + usize::from(self.saturation.is_some())
    }
}
