//! The preferences store owned by one overlay session.

use egui::Color32;

use super::color::{ColorAdjustments, ColorTarget, Contrast, Saturation};
use super::command::{PreferenceCommand, ResettableField};
use super::content::{Alignment, ContentAdjustments, ContentToggle, NumericField};
use super::orientation::{OrientationAdjustments, OrientationToggle, UsefulLink};
use super::profiles::{ProfileId, ProfileSet};

/// All accessibility state for one session.
///
/// Created with defaults when the page opens and dropped when it closes.
/// Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesStore {
    widget_open: bool,
    profiles: ProfileSet,
    content: ContentAdjustments,
    colors: ColorAdjustments,
    orientation: OrientationAdjustments,
}

impl PreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_widget_open(&self) -> bool {
        self.widget_open
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    pub fn content(&self) -> &ContentAdjustments {
        &self.content
    }

    pub fn colors(&self) -> &ColorAdjustments {
        &self.colors
    }

    pub fn orientation(&self) -> &OrientationAdjustments {
        &self.orientation
    }

    /// Open or close the overlay panel.
    pub fn toggle_widget_visibility(&mut self) {
        self.widget_open = !self.widget_open;
        tracing::debug!(open = self.widget_open, "Toggled accessibility widget");
    }

    pub fn toggle_profile(&mut self, id: ProfileId) {
        let active = self.profiles.toggle(id);
        tracing::debug!(profile = %id, active, "Toggled profile");
    }

    /// Add `delta` to a numeric content field, clamping at zero.
    pub fn adjust_numeric(&mut self, field: NumericField, delta: i32) {
        let value = self.content.adjust(field, delta);
        tracing::debug!(%field, delta, value, "Adjusted content field");
    }

    /// Restore a single field to its default. Other fields are untouched.
    pub fn reset_field(&mut self, field: impl Into<ResettableField>) {
        let field = field.into();
        match field {
            ResettableField::Numeric(numeric) => self.content.reset(numeric),
            ResettableField::Alignment => self.content.alignment = Alignment::default(),
            ResettableField::Contrast => self.colors.contrast = None,
            ResettableField::Saturation => self.colors.saturation = None,
            ResettableField::Color(target) => {
                self.colors.set_color(target, target.default_color())
            }
            ResettableField::UsefulLink => self.orientation.useful_link = None,
        }
        tracing::debug!(%field, "Reset field");
    }

    pub fn toggle_boolean(&mut self, field: ContentToggle) {
        let value = self.content.toggle(field);
        tracing::debug!(%field, value, "Toggled content field");
    }

    /// Set the alignment. Selecting the current alignment keeps it.
    pub fn set_alignment(&mut self, value: Alignment) {
        self.content.alignment = value;
        tracing::debug!(alignment = %value, "Set alignment");
    }

    /// Select a contrast mode; selecting the active one clears it.
    pub fn set_contrast(&mut self, value: Contrast) {
        let contrast = self.colors.select_contrast(value);
        tracing::debug!(requested = %value, ?contrast, "Set contrast");
    }

    /// Select a saturation mode; selecting the active one clears it.
    pub fn set_saturation(&mut self, value: Saturation) {
        let saturation = self.colors.select_saturation(value);
        tracing::debug!(requested = %value, ?saturation, "Set saturation");
    }

    pub fn set_color(&mut self, target: ColorTarget, color: Color32) {
        self.colors.set_color(target, color);
        tracing::debug!(%target, ?color, "Set color");
    }

    /// Flip an orientation field, keeping the big cursors exclusive.
    pub fn toggle_orientation(&mut self, field: OrientationToggle) {
        let value = self.orientation.toggle(field);
        tracing::debug!(%field, value, "Toggled orientation field");
    }

    pub fn set_useful_link(&mut self, value: Option<UsefulLink>) {
        self.orientation.useful_link = value;
        tracing::debug!(link = ?value, "Set useful link");
    }

    /// Restore every preference group to its defaults. The panel stays open.
    pub fn reset_all(&mut self) {
        self.profiles = ProfileSet::default();
        self.content = ContentAdjustments::default();
        self.colors = ColorAdjustments::default();
        self.orientation = OrientationAdjustments::default();
        tracing::info!("Reset all accessibility settings");
    }

    /// Apply one command.
    pub fn apply(&mut self, command: PreferenceCommand) {
        match command {
            PreferenceCommand::ToggleWidget => self.toggle_widget_visibility(),
            PreferenceCommand::ToggleProfile(id) => self.toggle_profile(id),
            PreferenceCommand::Adjust { field, delta } => self.adjust_numeric(field, delta),
            PreferenceCommand::Reset(field) => self.reset_field(field),
            PreferenceCommand::ToggleContent(field) => self.toggle_boolean(field),
            PreferenceCommand::SetAlignment(value) => self.set_alignment(value),
            PreferenceCommand::SetContrast(value) => self.set_contrast(value),
            PreferenceCommand::SetSaturation(value) => self.set_saturation(value),
            PreferenceCommand::SetColor { target, color } => self.set_color(target, color),
            PreferenceCommand::ToggleOrientation(field) => self.toggle_orientation(field),
            PreferenceCommand::SetUsefulLink(value) => self.set_useful_link(value),
            PreferenceCommand::ResetAll => self.reset_all(),
        }
    }

    /// Number of preferences that differ from their defaults.
    pub fn active_count(&self) -> usize {
        self.profiles.active_count()
            + self.content.changed_count()
            + self.colors.changed_count()
            + self.orientation.changed_count()
    }

    /// Whether every preference is at its default.
    pub fn is_default(&self) -> bool {
        self.profiles == ProfileSet::default()
            && self.content == ContentAdjustments::default()
            && self.colors == ColorAdjustments::default()
            && self.orientation == OrientationAdjustments::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_defaults() {
        let store = PreferencesStore::new();
        assert!(!store.is_widget_open());
        assert!(store.is_default());
        assert_eq!(store.active_count(), 0);
        assert_eq!(store.content().font_size, 100);
        assert_eq!(store.colors().background_color, Color32::WHITE);
    }

    #[test]
    fn test_widget_visibility_is_not_a_preference() {
        let mut store = PreferencesStore::new();
        store.toggle_widget_visibility();
        assert!(store.is_widget_open());
        assert!(store.is_default());

        store.reset_all();
        assert!(store.is_widget_open());
    }

    #[test]
    fn test_reset_field_by_kind() {
        let mut store = PreferencesStore::new();
        store.set_alignment(Alignment::Right);
        store.set_contrast(Contrast::High);
        store.set_color(ColorTarget::Text, Color32::RED);
        store.set_useful_link(Some(UsefulLink::Contact));

        store.reset_field(ResettableField::Alignment);
        store.reset_field(ColorTarget::Text);
        assert_eq!(store.content().alignment, Alignment::Left);
        assert_eq!(store.colors().text_color, Color32::BLACK);
        assert_eq!(store.colors().contrast, Some(Contrast::High));

        store.reset_field(ResettableField::Contrast);
        store.reset_field(ResettableField::UsefulLink);
        assert!(store.is_default());
    }

    #[test]
    fn test_active_count() {
        let mut store = PreferencesStore::new();
        store.toggle_profile(ProfileId::VisionImpaired);
        store.adjust_numeric(NumericField::ContentScaling, 10);
        store.set_saturation(Saturation::Low);
        store.toggle_orientation(OrientationToggle::BigWhiteCursor);
        store.toggle_orientation(OrientationToggle::BigBlackCursor);

        assert_eq!(store.active_count(), 4);
        store.reset_all();
        assert_eq!(store.active_count(), 0);
    }
}
