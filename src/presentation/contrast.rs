//! Contrast modes mapped to egui visuals.
//!
//! High contrast targets a 7:1 ratio (WCAG AAA) between text and panels.

use egui::{Color32, Visuals};

use crate::preferences::Contrast;
use crate::ui::theme::WidgetVariant;

/// Colors used by the high contrast mode.
pub struct HighContrastColors;

impl HighContrastColors {
    pub const BACKGROUND: Color32 = Color32::BLACK;
    pub const PANEL_BG: Color32 = Color32::from_rgb(10, 10, 10);
    pub const CARD_BG: Color32 = Color32::from_rgb(20, 20, 20);

    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(220, 220, 220);

    pub const ACCENT: Color32 = Color32::from_rgb(0, 200, 255); // Cyan
    pub const LINK: Color32 = Color32::from_rgb(255, 220, 0); // Bright yellow

    pub const BORDER: Color32 = Color32::WHITE;
}

/// Visuals for a contrast mode. With no mode selected the variant's own
/// visuals are used.
pub fn visuals_for(contrast: Option<Contrast>, variant: WidgetVariant) -> Visuals {
    match contrast {
        None => variant.visuals(),
        Some(Contrast::Dark) => dark_contrast_visuals(),
        Some(Contrast::Light) => light_contrast_visuals(),
        Some(Contrast::High) => high_contrast_visuals(),
    }
}

fn dark_contrast_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = Color32::from_rgb(24, 24, 24);
    visuals.panel_fill = Color32::from_rgb(24, 24, 24);
    visuals.extreme_bg_color = Color32::from_rgb(12, 12, 12);
    visuals.override_text_color = Some(Color32::from_rgb(245, 245, 245));
    visuals.hyperlink_color = Color32::from_rgb(120, 190, 255);

    visuals
}

fn light_contrast_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = Color32::WHITE;
    visuals.panel_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::from_rgb(250, 250, 250);
    visuals.override_text_color = Some(Color32::BLACK);
    visuals.hyperlink_color = Color32::from_rgb(0, 60, 160);

    visuals
}

fn high_contrast_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = HighContrastColors::PANEL_BG;
    visuals.panel_fill = HighContrastColors::PANEL_BG;
    visuals.faint_bg_color = HighContrastColors::CARD_BG;
    visuals.extreme_bg_color = HighContrastColors::BACKGROUND;
    visuals.override_text_color = Some(HighContrastColors::TEXT_PRIMARY);
    visuals.hyperlink_color = HighContrastColors::LINK;

    visuals.widgets.noninteractive.bg_fill = HighContrastColors::CARD_BG;
    visuals.widgets.inactive.bg_fill = HighContrastColors::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 40, 40);
    visuals.widgets.active.bg_fill = HighContrastColors::ACCENT;

    visuals.selection.bg_fill = HighContrastColors::ACCENT.linear_multiply(0.5);
    visuals.selection.stroke.color = HighContrastColors::ACCENT;

    visuals.widgets.inactive.fg_stroke.color = HighContrastColors::TEXT_SECONDARY;
    visuals.widgets.active.fg_stroke.color = HighContrastColors::BACKGROUND;

    // Borders are heavier so controls stay visible
    visuals.widgets.noninteractive.bg_stroke.color = HighContrastColors::BORDER;
    visuals.widgets.inactive.bg_stroke.color = HighContrastColors::BORDER;
    visuals.widgets.noninteractive.bg_stroke.width = 1.5;
    visuals.widgets.inactive.bg_stroke.width = 1.5;

    visuals
}

/// Contrast ratio between two colors, from 1 to 21.
pub fn contrast_ratio(fg: Color32, bg: Color32) -> f32 {
    let fg_lum = relative_luminance(fg);
    let bg_lum = relative_luminance(bg);

    let (lighter, darker) = if fg_lum > bg_lum {
        (fg_lum, bg_lum)
    } else {
        (bg_lum, fg_lum)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// https://www.w3.org/TR/WCAG21/#dfn-relative-luminance
fn relative_luminance(color: Color32) -> f32 {
    let r = linearize(color.r() as f32 / 255.0);
    let g = linearize(color.g() as f32 / 255.0);
    let b = linearize(color.b() as f32 / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(value: f32) -> f32 {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// 4.5:1 for normal text.
pub fn meets_aa(fg: Color32, bg: Color32) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// 7:1 for normal text.
pub fn meets_aaa(fg: Color32, bg: Color32) -> bool {
    contrast_ratio(fg, bg) >= 7.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio(Color32::WHITE, Color32::BLACK);
        assert!(ratio > 20.0, "Black on white should be ~21:1");
        assert!((contrast_ratio(Color32::GRAY, Color32::GRAY) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_high_contrast_meets_aaa() {
        assert!(meets_aaa(
            HighContrastColors::TEXT_PRIMARY,
            HighContrastColors::PANEL_BG
        ));
        assert!(meets_aaa(
            HighContrastColors::LINK,
            HighContrastColors::BACKGROUND
        ));
        assert!(meets_aa(
            HighContrastColors::TEXT_SECONDARY,
            HighContrastColors::CARD_BG
        ));
    }

    #[test]
    fn test_modes_pick_distinct_visuals() {
        let variant = WidgetVariant::Classic;
        assert_eq!(visuals_for(None, variant), variant.visuals());
        assert!(visuals_for(Some(Contrast::Dark), variant).dark_mode);
        assert!(!visuals_for(Some(Contrast::Light), variant).dark_mode);
        assert_eq!(
            visuals_for(Some(Contrast::High), variant).override_text_color,
            Some(Color32::WHITE)
        );
    }
}
