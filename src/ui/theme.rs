//! Widget theme definitions.
//!
//! The overlay ships in two cosmetic variants. They differ only in colors
//! and icons; both drive the same store.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

use crate::preferences::{
    Alignment, ContentToggle, Contrast, NumericField, OrientationToggle, ProfileId, Saturation,
};

/// Cosmetic variant of the overlay widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetVariant {
    /// Light panel, blue accent, text glyphs
    #[default]
    Classic,
    /// Dark panel, violet accent, symbol glyphs
    Modern,
}

impl std::fmt::Display for WidgetVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetVariant::Classic => write!(f, "Classic"),
            WidgetVariant::Modern => write!(f, "Modern"),
        }
    }
}

/// Colors of one widget variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetPalette {
    pub background: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    /// Text drawn on top of the accent color
    pub on_accent: Color32,
    pub border: Color32,
}

impl WidgetVariant {
    pub fn palette(&self) -> WidgetPalette {
        match self {
            WidgetVariant::Classic => WidgetPalette {
                background: Color32::from_rgb(250, 250, 252),
                panel_bg: Color32::from_rgb(255, 255, 255),
                card_bg: Color32::from_rgb(245, 245, 248),
                text_primary: Color32::from_rgb(32, 32, 40),
                text_secondary: Color32::from_rgb(96, 96, 104),
                accent: Color32::from_rgb(26, 115, 232),
                on_accent: Color32::WHITE,
                border: Color32::from_rgb(218, 218, 224),
            },
            WidgetVariant::Modern => WidgetPalette {
                background: Color32::from_rgb(18, 18, 24),
                panel_bg: Color32::from_rgb(28, 28, 36),
                card_bg: Color32::from_rgb(38, 38, 48),
                text_primary: Color32::from_rgb(240, 240, 245),
                text_secondary: Color32::from_rgb(160, 160, 170),
                accent: Color32::from_rgb(124, 77, 255),
                on_accent: Color32::WHITE,
                border: Color32::from_rgb(60, 60, 70),
            },
        }
    }

    /// egui visuals for this variant.
    pub fn visuals(&self) -> Visuals {
        let palette = self.palette();
        let mut visuals = match self {
            WidgetVariant::Classic => Visuals::light(),
            WidgetVariant::Modern => Visuals::dark(),
        };

        visuals.window_fill = palette.panel_bg;
        visuals.panel_fill = palette.panel_bg;
        visuals.faint_bg_color = palette.card_bg;
        visuals.extreme_bg_color = palette.background;

        visuals.widgets.noninteractive.bg_fill = palette.card_bg;
        visuals.widgets.inactive.bg_fill = palette.card_bg;
        visuals.widgets.active.bg_fill = palette.accent;

        visuals.selection.bg_fill = palette.accent.linear_multiply(0.3);
        visuals.selection.stroke.color = palette.accent;

        visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
        visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
        visuals.widgets.hovered.fg_stroke.color = palette.text_primary;
        visuals.widgets.active.fg_stroke.color = palette.on_accent;

        visuals.widgets.noninteractive.bg_stroke.color = palette.border;
        visuals.widgets.inactive.bg_stroke.color = palette.border;

        visuals
    }

    /// Icon set for this variant.
    pub fn icons(&self) -> IconSet {
        IconSet { variant: *self }
    }
}

/// Something on the panel that carries an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Launcher,
    Close,
    Reset,
    Increase,
    Decrease,
    Profile(ProfileId),
    Numeric(NumericField),
    Content(ContentToggle),
    Alignment(Alignment),
    Contrast(Contrast),
    Saturation(Saturation),
    Orientation(OrientationToggle),
    UsefulLink,
}

/// Glyph lookup for one variant.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    variant: WidgetVariant,
}

impl IconSet {
    pub fn glyph(&self, icon: Icon) -> &'static str {
        match self.variant {
            WidgetVariant::Classic => classic_glyph(icon),
            WidgetVariant::Modern => modern_glyph(icon),
        }
    }
}

fn classic_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Launcher => "♿",
        Icon::Close => "✖",
        Icon::Reset => "⟲",
        Icon::Increase => "+",
        Icon::Decrease => "−",
        Icon::Profile(_) => "●",
        Icon::Numeric(NumericField::ContentScaling) => "⤢",
        Icon::Numeric(_) => "Aa",
        Icon::Content(ContentToggle::ReadableFont) => "Tt",
        Icon::Content(ContentToggle::HighlightTitles) => "H",
        Icon::Content(ContentToggle::HighlightLinks) => "🔗",
        Icon::Content(ContentToggle::TextMagnifier) => "🔍",
        Icon::Alignment(Alignment::Left) => "⇤",
        Icon::Alignment(Alignment::Center) => "↔",
        Icon::Alignment(Alignment::Right) => "⇥",
        Icon::Contrast(_) => "◐",
        Icon::Saturation(_) => "💧",
        Icon::Orientation(OrientationToggle::MuteSounds) => "🔇",
        Icon::Orientation(OrientationToggle::HideImages) => "🖼",
        Icon::Orientation(OrientationToggle::BigBlackCursor)
        | Icon::Orientation(OrientationToggle::BigWhiteCursor) => "➚",
        Icon::Orientation(_) => "☰",
        Icon::UsefulLink => "🔗",
    }
}

fn modern_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Launcher => "⚙",
        Icon::Close => "×",
        Icon::Reset => "↺",
        Icon::Increase => "▲",
        Icon::Decrease => "▼",
        Icon::Profile(_) => "◆",
        Icon::Contrast(Contrast::Dark) => "☾",
        Icon::Contrast(Contrast::Light) => "☀",
        Icon::Contrast(Contrast::High) => "◑",
        Icon::Saturation(Saturation::Monochrome) => "◻",
        Icon::Saturation(_) => "◈",
        Icon::Orientation(OrientationToggle::ReadingGuide)
        | Icon::Orientation(OrientationToggle::ReadingMask) => "▭",
        Icon::Orientation(OrientationToggle::StopAnimations) => "⏸",
        other => classic_glyph(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ_only_cosmetically() {
        assert_ne!(
            WidgetVariant::Classic.palette().accent,
            WidgetVariant::Modern.palette().accent
        );
        assert!(!WidgetVariant::Classic.visuals().dark_mode);
        assert!(WidgetVariant::Modern.visuals().dark_mode);
        assert_ne!(
            WidgetVariant::Classic.icons().glyph(Icon::Launcher),
            WidgetVariant::Modern.icons().glyph(Icon::Launcher)
        );
    }

    #[test]
    fn test_every_orientation_field_has_a_glyph() {
        for variant in [WidgetVariant::Classic, WidgetVariant::Modern] {
            for field in OrientationToggle::ALL {
                assert!(!variant.icons().glyph(Icon::Orientation(field)).is_empty());
            }
        }
    }
}
