//! Text commands and dispatch through `apply`.

use a11y_overlay::preferences::{
    ColorTarget, Contrast, NumericField, OrientationToggle, PreferenceCommand, PreferenceError,
    PreferencesStore, ProfileId,
};
use egui::Color32;

fn run(store: &mut PreferencesStore, script: &[(&str, &str)]) -> Result<(), PreferenceError> {
    for (key, value) in script {
        store.apply(PreferenceCommand::parse(key, value)?);
    }
    Ok(())
}

#[test]
fn test_script_matches_direct_calls() {
    let mut scripted = PreferencesStore::new();
    run(
        &mut scripted,
        &[
            ("widget", ""),
            ("profile", "vision-impaired"),
            ("increase", "content-scaling"),
            ("decrease", "letter-spacing"),
            ("toggle", "highlight-titles"),
            ("align", "right"),
            ("contrast", "dark"),
            ("saturation", "low"),
            ("title-color", "#d72638"),
            ("orientation", "big-black-cursor"),
            ("useful-link", "contact"),
        ],
    )
    .unwrap();

    let mut direct = PreferencesStore::new();
    direct.toggle_widget_visibility();
    direct.toggle_profile(ProfileId::VisionImpaired);
    direct.adjust_numeric(NumericField::ContentScaling, 10);
    direct.adjust_numeric(NumericField::LetterSpacing, -10);
    direct.toggle_boolean(a11y_overlay::preferences::ContentToggle::HighlightTitles);
    direct.set_alignment(a11y_overlay::preferences::Alignment::Right);
    direct.set_contrast(Contrast::Dark);
    direct.set_saturation(a11y_overlay::preferences::Saturation::Low);
    direct.set_color(ColorTarget::Title, Color32::from_rgb(0xd7, 0x26, 0x38));
    direct.toggle_orientation(OrientationToggle::BigBlackCursor);
    direct.set_useful_link(Some(a11y_overlay::preferences::UsefulLink::Contact));

    assert_eq!(scripted, direct);
}

#[test]
fn test_reset_commands() {
    let mut store = PreferencesStore::new();
    run(
        &mut store,
        &[
            ("increase", "font-size"),
            ("contrast", "high"),
            ("text-color", "#ffffff"),
            ("reset", "font-size"),
            ("reset", "text-color"),
        ],
    )
    .unwrap();

    assert_eq!(store.content().font_size, 100);
    assert_eq!(store.colors().text_color, Color32::BLACK);
    assert_eq!(store.colors().contrast, Some(Contrast::High));

    run(&mut store, &[("reset-all", "")]).unwrap();
    assert!(store.is_default());
}

#[test]
fn test_unknown_keys_fail_fast() {
    let mut store = PreferencesStore::new();
    let result = run(
        &mut store,
        &[("increase", "font-size"), ("orientation", "flashing-lights")],
    );

    assert_eq!(
        result,
        Err(PreferenceError::UnknownField("flashing-lights".to_string()))
    );
    // Commands before the bad one were applied, nothing after
    assert_eq!(store.content().font_size, 110);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PreferenceError::UnknownProfile("x".to_string()).to_string(),
        "Unknown profile: x"
    );
    assert_eq!(
        PreferenceCommand::parse("saturation", "neon")
            .unwrap_err()
            .to_string(),
        "Unknown value 'neon' for saturation"
    );
}
