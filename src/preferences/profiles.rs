//! Accessibility profiles.
//!
//! A profile is a named preset a user can switch on. Profiles are independent
//! of each other and of the individual adjustments.

use std::str::FromStr;

use super::PreferenceError;

/// One of the fixed accessibility profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileId {
    /// Removes flashes and reduces color intensity
    SeizureSafe,
    /// Enhances the page's visuals
    VisionImpaired,
    /// Reduces distractions and improves focus
    AdhdFriendly,
    /// Assists with reading and focusing
    CognitiveDisability,
    /// Use the page with the keyboard only
    KeyboardNavigation,
    /// Optimizes the page for screen readers
    BlindUsers,
}

impl ProfileId {
    pub const COUNT: usize = 6;

    /// Every profile, in panel order.
    pub const ALL: [ProfileId; Self::COUNT] = [
        ProfileId::SeizureSafe,
        ProfileId::VisionImpaired,
        ProfileId::AdhdFriendly,
        ProfileId::CognitiveDisability,
        ProfileId::KeyboardNavigation,
        ProfileId::BlindUsers,
    ];

    /// Stable identifier used at text boundaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileId::SeizureSafe => "seizure-safe",
            ProfileId::VisionImpaired => "vision-impaired",
            ProfileId::AdhdFriendly => "adhd-friendly",
            ProfileId::CognitiveDisability => "cognitive-disability",
            ProfileId::KeyboardNavigation => "keyboard-navigation",
            ProfileId::BlindUsers => "blind-users",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileId::SeizureSafe => "Seizure Safe Profile",
            ProfileId::VisionImpaired => "Vision Impaired Profile",
            ProfileId::AdhdFriendly => "ADHD Friendly Profile",
            ProfileId::CognitiveDisability => "Cognitive Disability Profile",
            ProfileId::KeyboardNavigation => "Keyboard Navigation (Motor)",
            ProfileId::BlindUsers => "Blind Users (Screen Reader)",
        }
    }

    /// Short description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            ProfileId::SeizureSafe => "Clear flashes & reduces color",
            ProfileId::VisionImpaired => "Enhances website's visuals",
            ProfileId::AdhdFriendly => "More focus & fewer distractions",
            ProfileId::CognitiveDisability => "Assists with reading & focusing",
            ProfileId::KeyboardNavigation => "Use website with the keyboard",
            ProfileId::BlindUsers => "Optimize website for screen-readers",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownProfile(s.to_string()))
    }
}

/// On/off state of every profile. All profiles start off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileSet {
    active: [bool; ProfileId::COUNT],
}

impl ProfileSet {
    /// Whether the given profile is switched on.
    pub fn is_active(&self, id: ProfileId) -> bool {
        self.active[id.index()]
    }

    /// Flip a profile and return its new state.
    pub fn toggle(&mut self, id: ProfileId) -> bool {
        let slot = &mut self.active[id.index()];
        *slot = !*slot;
        *slot
    }

    /// Number of profiles switched on.
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|on| **on).count()
    }
}
