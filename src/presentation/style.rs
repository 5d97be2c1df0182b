//! Render style derived from the preferences store.

use std::collections::BTreeMap;

use egui::{Align, Color32, FontFamily, FontId, TextStyle, Visuals};

use super::contrast::visuals_for;
use super::saturation::{self, SaturationFilter};
use crate::preferences::{
    Alignment, ColorTarget, PreferencesStore, ProfileId, Saturation, UsefulLink,
};
use crate::ui::theme::WidgetVariant;

/// Scale applied to text under the pointer when the magnifier is on.
pub const MAGNIFIER_SCALE: f32 = 1.25;

/// Extra pixels between letters per 100% of letter spacing above default.
const LETTER_SPACING_PX: f32 = 4.0;

/// Smallest glyph size handed to the renderer; epaint rejects a zero scale.
pub const MIN_FONT_PX: f32 = 1.0;

/// Largest glyph size handed to the renderer. Glyphs must fit in the font
/// texture atlas, which is 2048 px wide on the smallest supported backends.
pub const MAX_FONT_PX: f32 = 512.0;

/// Largest row height, four rows of the largest glyph.
const MAX_LINE_PX: f32 = 4.0 * MAX_FONT_PX;

/// Default egui animation time in seconds.
const ANIMATION_TIME: f32 = 1.0 / 12.0;

/// Pointer size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorSize {
    #[default]
    Normal,
    BigBlack,
    BigWhite,
}

/// Everything the renderer needs to paint the page with the current
/// preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationStyle {
    /// Overall zoom of page content (1.0 = 100%)
    pub content_scale: f32,
    /// Font size multiplier on top of the content zoom
    pub font_scale: f32,
    /// Scale of hovered text, if the magnifier is on
    pub magnifier_scale: Option<f32>,
    /// Line height multiplier
    pub line_spacing: f32,
    /// Extra spacing between letters in points, may be negative
    pub letter_spacing: f32,
    pub align: Align,
    pub readable_font: bool,
    pub text_color: Color32,
    pub title_color: Color32,
    pub background_color: Color32,
    /// Saturation filter for any other page color
    pub saturation: Option<Saturation>,
    pub visuals: Visuals,
    pub cursor: CursorSize,
    pub animation_time: f32,
    pub highlight_titles: bool,
    pub highlight_links: bool,
    pub highlight_hover: bool,
    pub highlight_focus: bool,
    pub hide_images: bool,
    pub read_mode: bool,
    pub reading_guide: bool,
    pub reading_mask: bool,
    pub mute_sounds: bool,
    pub useful_link: Option<UsefulLink>,
}

impl PresentationStyle {
    /// Derive the style for the current preferences.
    pub fn from_preferences(store: &PreferencesStore, variant: WidgetVariant) -> Self {
        let content = store.content();
        let colors = store.colors();
        let orientation = store.orientation();
        let profiles = store.profiles();

        let cursor = if orientation.big_black_cursor {
            CursorSize::BigBlack
        } else if orientation.big_white_cursor {
            CursorSize::BigWhite
        } else {
            CursorSize::Normal
        };

        let still = orientation.stop_animations || profiles.is_active(ProfileId::SeizureSafe);

        // A contrast mode recolors the page unless the user picked a custom color.
        let visuals = visuals_for(colors.contrast, variant);
        let page_color = |target: ColorTarget| {
            let chosen = colors.color(target);
            let themed = match target {
                ColorTarget::Background => colors.contrast.map(|_| visuals.panel_fill),
                ColorTarget::Text | ColorTarget::Title => {
                    colors.contrast.and(visuals.override_text_color)
                }
            };
            match themed {
                Some(color) if chosen == target.default_color() => colors.filter(color),
                _ => colors.filter(chosen),
            }
        };
        let text_color = page_color(ColorTarget::Text);
        let title_color = page_color(ColorTarget::Title);
        let background_color = page_color(ColorTarget::Background);

        Self {
            content_scale: percent(content.content_scaling),
            font_scale: percent(content.font_size),
            magnifier_scale: content.text_magnifier.then_some(MAGNIFIER_SCALE),
            line_spacing: percent(content.line_height),
            letter_spacing: (percent(content.letter_spacing) - 1.0) * LETTER_SPACING_PX,
            align: match content.alignment {
                Alignment::Left => Align::Min,
                Alignment::Center => Align::Center,
                Alignment::Right => Align::Max,
            },
            readable_font: content.readable_font,
            text_color,
            title_color,
            background_color,
            saturation: colors.saturation,
            visuals,
            cursor,
            animation_time: if still { 0.0 } else { ANIMATION_TIME },
            highlight_titles: content.highlight_titles,
            highlight_links: content.highlight_links,
            highlight_hover: orientation.highlight_hover,
            highlight_focus: orientation.highlight_focus
                || profiles.is_active(ProfileId::KeyboardNavigation),
            hide_images: orientation.hide_images,
            read_mode: orientation.read_mode,
            reading_guide: orientation.reading_guide,
            reading_mask: orientation.reading_mask,
            mute_sounds: orientation.mute_sounds,
            useful_link: orientation.useful_link,
        }
    }

    /// Filter an arbitrary page color through the saturation setting.
    pub fn filter(&self, color: Color32) -> Color32 {
        saturation::apply(self.saturation, color)
    }

    /// Combined text scale of page content, as stored. Unbounded.
    pub fn text_scale(&self) -> f32 {
        self.content_scale * self.font_scale
    }

    /// Glyph size in pixels for a base size, clamped to what the renderer
    /// can draw.
    pub fn font_px(&self, size: f32) -> f32 {
        (size * self.text_scale()).clamp(MIN_FONT_PX, MAX_FONT_PX)
    }

    /// Font family for page text. The readable font is Hack, egui's
    /// monospace face, which keeps `I`, `l` and `1` (and `O` and `0`) apart.
    pub fn font_family(&self) -> FontFamily {
        if self.readable_font {
            FontFamily::Monospace
        } else {
            FontFamily::Proportional
        }
    }

    /// Font for page text at a base size.
    pub fn font_id(&self, size: f32) -> FontId {
        FontId::new(self.font_px(size), self.font_family())
    }

    /// Text styles for page content, scaled from `base`.
    ///
    /// Always scale from the unmodified base so repeated frames do not
    /// compound the factor.
    pub fn scaled_text_styles(
        &self,
        base: &BTreeMap<TextStyle, FontId>,
    ) -> BTreeMap<TextStyle, FontId> {
        base.iter()
            .map(|(style, font)| {
                let family = if self.readable_font {
                    FontFamily::Monospace
                } else {
                    font.family.clone()
                };
                (style.clone(), FontId::new(self.font_px(font.size), family))
            })
            .collect()
    }

    /// Row height for a font size, honouring the line height setting.
    pub fn line_height_for(&self, font_size: f32) -> f32 {
        (self.font_px(font_size) * 1.4 * self.line_spacing).clamp(MIN_FONT_PX, MAX_LINE_PX)
    }
}

fn percent(value: u32) -> f32 {
    value as f32 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{Contrast, ContentToggle, NumericField, OrientationToggle};

    #[test]
    fn test_default_style() {
        let store = PreferencesStore::new();
        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Modern);

        assert_eq!(style.text_scale(), 1.0);
        assert_eq!(style.letter_spacing, 0.0);
        assert_eq!(style.cursor, CursorSize::Normal);
        assert_eq!(style.visuals, WidgetVariant::Modern.visuals());
        assert_eq!(style.align, Align::Min);
        assert_eq!(style.background_color, Color32::WHITE);
        assert!(style.animation_time > 0.0);
    }

    #[test]
    fn test_scaling_combines_content_and_font() {
        let mut store = PreferencesStore::new();
        store.adjust_numeric(NumericField::ContentScaling, 100);
        store.adjust_numeric(NumericField::FontSize, -50);
        store.adjust_numeric(NumericField::LetterSpacing, -100);

        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);
        assert!((style.text_scale() - 1.0).abs() < 1e-6);
        assert!((style.letter_spacing + LETTER_SPACING_PX).abs() < 1e-6);
    }

    #[test]
    fn test_scaled_text_styles_do_not_compound() {
        let mut store = PreferencesStore::new();
        store.adjust_numeric(NumericField::FontSize, 100);
        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);

        let base = egui::Style::default().text_styles;
        let once = style.scaled_text_styles(&base);
        let again = style.scaled_text_styles(&base);
        assert_eq!(once, again);
        assert_eq!(once[&TextStyle::Body].size, base[&TextStyle::Body].size * 2.0);
    }

    #[test]
    fn test_zero_font_size_keeps_minimum() {
        let mut store = PreferencesStore::new();
        store.adjust_numeric(NumericField::FontSize, -100);
        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);

        let base = egui::Style::default().text_styles;
        assert_eq!(style.scaled_text_styles(&base)[&TextStyle::Body].size, MIN_FONT_PX);
        assert_eq!(style.font_px(40.0), MIN_FONT_PX);
        assert_eq!(style.line_height_for(40.0), MIN_FONT_PX * 1.4);
    }

    #[test]
    fn test_huge_font_size_is_capped_for_rendering() {
        let mut store = PreferencesStore::new();
        store.adjust_numeric(NumericField::FontSize, 19_900);
        store.adjust_numeric(NumericField::LineHeight, 100_000);
        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);

        assert_eq!(store.content().font_size, 20_000);
        assert_eq!(style.text_scale(), 200.0);
        assert_eq!(style.font_px(40.0), MAX_FONT_PX);
        assert_eq!(style.line_height_for(40.0), MAX_LINE_PX);

        let base = egui::Style::default().text_styles;
        assert!(style
            .scaled_text_styles(&base)
            .values()
            .all(|font| font.size <= MAX_FONT_PX));
    }

    #[test]
    fn test_readable_font_switches_family() {
        let mut store = PreferencesStore::new();
        let plain = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);
        assert_eq!(plain.font_id(15.0).family, FontFamily::Proportional);

        store.toggle_boolean(ContentToggle::ReadableFont);
        let readable = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);
        assert_eq!(readable.font_id(15.0), FontId::monospace(15.0));

        let base = egui::Style::default().text_styles;
        assert_eq!(
            readable.scaled_text_styles(&base)[&TextStyle::Body].family,
            FontFamily::Monospace
        );
    }

    #[test]
    fn test_cursor_and_motion() {
        let mut store = PreferencesStore::new();
        store.toggle_orientation(OrientationToggle::BigWhiteCursor);
        store.toggle_profile(ProfileId::SeizureSafe);

        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);
        assert_eq!(style.cursor, CursorSize::BigWhite);
        assert_eq!(style.animation_time, 0.0);
    }

    #[test]
    fn test_colors_pass_through_saturation() {
        let mut store = PreferencesStore::new();
        store.set_color(ColorTarget::Title, Color32::from_rgb(255, 0, 0));
        store.set_saturation(Saturation::Monochrome);
        store.set_contrast(Contrast::High);

        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);
        assert_eq!(style.title_color, Color32::from_rgb(76, 76, 76));
        assert_eq!(style.visuals.override_text_color, Some(Color32::WHITE));
    }

    #[test]
    fn test_contrast_recolors_default_page_colors() {
        let mut store = PreferencesStore::new();
        store.set_contrast(Contrast::Dark);
        store.set_color(ColorTarget::Title, Color32::from_rgb(0, 102, 204));

        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);
        assert_eq!(style.text_color, Color32::from_rgb(245, 245, 245));
        assert_eq!(style.background_color, Color32::from_rgb(24, 24, 24));
        assert_eq!(style.title_color, Color32::from_rgb(0, 102, 204));
    }
}
