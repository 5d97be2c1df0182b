//! Store scenarios: clamping, resets, toggle-to-none and cursor exclusivity.

use a11y_overlay::preferences::{
    Alignment, ColorTarget, ContentToggle, Contrast, NumericField, OrientationToggle,
    PreferencesStore, ProfileId, Saturation, UsefulLink, DEFAULT_STEP,
};
use egui::Color32;

#[test]
fn test_font_size_clamps_then_resets() {
    let mut store = PreferencesStore::new();

    for _ in 0..11 {
        store.adjust_numeric(NumericField::FontSize, -DEFAULT_STEP);
    }
    assert_eq!(store.content().font_size, 0);

    store.reset_field(NumericField::FontSize);
    assert_eq!(store.content().font_size, 100);
}

#[test]
fn test_contrast_select_again_clears() {
    let mut store = PreferencesStore::new();

    store.set_contrast(Contrast::High);
    assert_eq!(store.colors().contrast, Some(Contrast::High));

    store.set_contrast(Contrast::High);
    assert_eq!(store.colors().contrast, None);

    store.set_contrast(Contrast::Dark);
    assert_eq!(store.colors().contrast, Some(Contrast::Dark));
}

#[test]
fn test_saturation_select_again_clears() {
    let mut store = PreferencesStore::new();

    store.set_saturation(Saturation::Low);
    store.set_saturation(Saturation::High);
    assert_eq!(store.colors().saturation, Some(Saturation::High));

    store.set_saturation(Saturation::High);
    assert_eq!(store.colors().saturation, None);
}

#[test]
fn test_big_cursors_are_exclusive() {
    let mut store = PreferencesStore::new();

    store.toggle_orientation(OrientationToggle::BigWhiteCursor);
    store.toggle_orientation(OrientationToggle::BigBlackCursor);
    assert!(store.orientation().big_black_cursor);
    assert!(!store.orientation().big_white_cursor);

    store.toggle_orientation(OrientationToggle::BigWhiteCursor);
    assert!(store.orientation().big_white_cursor);
    assert!(!store.orientation().big_black_cursor);
}

#[test]
fn test_alignment_always_sets() {
    let mut store = PreferencesStore::new();

    store.set_alignment(Alignment::Center);
    store.set_alignment(Alignment::Center);
    assert_eq!(store.content().alignment, Alignment::Center);
}

#[test]
fn test_useful_link_can_be_cleared() {
    let mut store = PreferencesStore::new();

    store.set_useful_link(Some(UsefulLink::Sitemap));
    assert_eq!(store.orientation().useful_link, Some(UsefulLink::Sitemap));

    store.set_useful_link(UsefulLink::parse_selection("").unwrap());
    assert_eq!(store.orientation().useful_link, None);
}

#[test]
fn test_reset_all_restores_everything() {
    let mut store = PreferencesStore::new();

    store.toggle_profile(ProfileId::CognitiveDisability);
    store.adjust_numeric(NumericField::LineHeight, 40);
    store.toggle_boolean(ContentToggle::ReadableFont);
    store.set_alignment(Alignment::Right);
    store.set_contrast(Contrast::Light);
    store.set_saturation(Saturation::Monochrome);
    store.set_color(ColorTarget::Background, Color32::from_rgb(10, 20, 30));
    store.toggle_orientation(OrientationToggle::StopAnimations);
    store.set_useful_link(Some(UsefulLink::Help));
    assert!(!store.is_default());

    store.reset_all();

    assert!(store.is_default());
    assert_eq!(store.active_count(), 0);
    assert_eq!(store.content().line_height, 100);
    assert_eq!(store.colors().background_color, Color32::WHITE);
    assert_eq!(store.orientation().useful_link, None);
}

#[test]
fn test_reset_field_keeps_other_fields() {
    let mut store = PreferencesStore::new();

    store.adjust_numeric(NumericField::ContentScaling, 20);
    store.adjust_numeric(NumericField::LetterSpacing, -30);
    store.reset_field(NumericField::LetterSpacing);

    assert_eq!(store.content().content_scaling, 120);
    assert_eq!(store.content().letter_spacing, 100);
}
