//! Property tests over arbitrary command sequences.

use a11y_overlay::preferences::{
    Alignment, ColorTarget, ContentToggle, Contrast, NumericField, OrientationToggle,
    PreferenceCommand, PreferencesStore, ProfileId, ResettableField, Saturation, UsefulLink,
};
use a11y_overlay::{PresentationStyle, WidgetVariant};
use egui::Color32;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_profile() -> impl Strategy<Value = ProfileId> {
    prop::sample::select(ProfileId::ALL.to_vec())
}

fn arb_numeric() -> impl Strategy<Value = NumericField> {
    prop::sample::select(NumericField::ALL.to_vec())
}

fn arb_contrast() -> impl Strategy<Value = Contrast> {
    prop::sample::select(Contrast::ALL.to_vec())
}

fn arb_saturation() -> impl Strategy<Value = Saturation> {
    prop::sample::select(Saturation::ALL.to_vec())
}

fn arb_orientation() -> impl Strategy<Value = OrientationToggle> {
    prop::sample::select(OrientationToggle::ALL.to_vec())
}

fn arb_color() -> impl Strategy<Value = Color32> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| Color32::from_rgb(r, g, b))
}

fn arb_command() -> impl Strategy<Value = PreferenceCommand> {
    prop_oneof![
        Just(PreferenceCommand::ToggleWidget),
        arb_profile().prop_map(PreferenceCommand::ToggleProfile),
        (arb_numeric(), -50i32..50).prop_map(|(field, delta)| PreferenceCommand::Adjust {
            field,
            delta
        }),
        arb_numeric().prop_map(|field| PreferenceCommand::Reset(field.into())),
        prop::sample::select(ContentToggle::ALL.to_vec())
            .prop_map(PreferenceCommand::ToggleContent),
        prop::sample::select(Alignment::ALL.to_vec()).prop_map(PreferenceCommand::SetAlignment),
        arb_contrast().prop_map(PreferenceCommand::SetContrast),
        arb_saturation().prop_map(PreferenceCommand::SetSaturation),
        (prop::sample::select(ColorTarget::ALL.to_vec()), arb_color())
            .prop_map(|(target, color)| PreferenceCommand::SetColor { target, color }),
        arb_orientation().prop_map(PreferenceCommand::ToggleOrientation),
        prop::option::of(prop::sample::select(UsefulLink::ALL.to_vec()))
            .prop_map(PreferenceCommand::SetUsefulLink),
    ]
}

fn arb_commands() -> impl Strategy<Value = Vec<PreferenceCommand>> {
    prop::collection::vec(arb_command(), 0..64)
}

fn run(commands: &[PreferenceCommand]) -> PreferencesStore {
    let mut store = PreferencesStore::new();
    for command in commands {
        store.apply(*command);
    }
    store
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn numeric_fields_never_negative(
        steps in prop::collection::vec((arb_numeric(), any::<i32>()), 0..100)
    ) {
        let mut store = PreferencesStore::new();
        for (field, delta) in steps {
            let before = store.content().numeric(field) as i64;
            store.adjust_numeric(field, delta);
            let expected = (before + delta as i64).clamp(0, u32::MAX as i64) as u32;
            prop_assert_eq!(store.content().numeric(field), expected);
        }
    }

    #[test]
    fn reset_field_restores_default(commands in arb_commands(), field in arb_numeric()) {
        let mut store = run(&commands);
        store.reset_field(field);
        prop_assert_eq!(store.content().numeric(field), 100);
    }

    #[test]
    fn reset_field_is_local(commands in arb_commands(), field in arb_numeric()) {
        let store = run(&commands);
        let mut reset = store.clone();
        reset.reset_field(ResettableField::Numeric(field));
        for other in NumericField::ALL.into_iter().filter(|f| *f != field) {
            prop_assert_eq!(reset.content().numeric(other), store.content().numeric(other));
        }
    }

    #[test]
    fn contrast_toggles_to_none(commands in arb_commands(), x in arb_contrast(), y in arb_contrast()) {
        let mut store = run(&commands);
        store.set_contrast(x);
        store.set_contrast(x);
        prop_assert_eq!(store.colors().contrast, None);

        store.set_contrast(x);
        store.set_contrast(y);
        let expected = if x == y { None } else { Some(y) };
        prop_assert_eq!(store.colors().contrast, expected);
    }

    #[test]
    fn saturation_toggles_to_none(commands in arb_commands(), x in arb_saturation(), y in arb_saturation()) {
        let mut store = run(&commands);
        let contrast = store.colors().contrast;
        store.set_saturation(x);
        store.set_saturation(x);
        prop_assert_eq!(store.colors().saturation, None);

        store.set_saturation(x);
        store.set_saturation(y);
        let expected = if x == y { None } else { Some(y) };
        prop_assert_eq!(store.colors().saturation, expected);
        prop_assert_eq!(store.colors().contrast, contrast);
    }

    #[test]
    fn cursors_never_both_on(commands in arb_commands()) {
        let store = run(&commands);
        prop_assert!(!(store.orientation().big_black_cursor && store.orientation().big_white_cursor));
    }

    #[test]
    fn turning_a_cursor_on_turns_the_other_off(commands in arb_commands()) {
        let mut store = run(&commands);
        if !store.orientation().big_black_cursor {
            store.toggle_orientation(OrientationToggle::BigBlackCursor);
            prop_assert!(store.orientation().big_black_cursor);
            prop_assert!(!store.orientation().big_white_cursor);
        }
        if !store.orientation().big_white_cursor {
            store.toggle_orientation(OrientationToggle::BigWhiteCursor);
            prop_assert!(store.orientation().big_white_cursor);
            prop_assert!(!store.orientation().big_black_cursor);
        }
    }

    #[test]
    fn toggle_profile_is_involution(commands in arb_commands(), id in arb_profile()) {
        let mut store = run(&commands);
        let before = *store.profiles();
        store.toggle_profile(id);
        store.toggle_profile(id);
        prop_assert_eq!(*store.profiles(), before);
    }

    #[test]
    fn reset_all_returns_to_defaults(commands in arb_commands()) {
        let mut store = run(&commands);
        store.reset_all();
        prop_assert!(store.is_default());
        prop_assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn active_count_zero_iff_default(commands in arb_commands()) {
        let store = run(&commands);
        prop_assert_eq!(store.active_count() == 0, store.is_default());
    }

    #[test]
    fn style_scale_tracks_numeric_fields(commands in arb_commands()) {
        let store = run(&commands);
        let style = PresentationStyle::from_preferences(&store, WidgetVariant::Classic);
        let expected = store.content().content_scaling as f32 / 100.0
            * store.content().font_size as f32 / 100.0;
        prop_assert!((style.text_scale() - expected).abs() < 1e-4);
        prop_assert!(style.text_scale() >= 0.0);
    }
}
