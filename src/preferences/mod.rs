//! Accessibility preferences.
//!
//! This module holds the state behind the accessibility overlay:
//! - Profiles (independent presets)
//! - Content adjustments (scaling, typography, alignment)
//! - Color adjustments (contrast, saturation, custom colors)
//! - Orientation adjustments (reading aids, cursor size, useful links)
//!
//! All of it is owned by a [`PreferencesStore`] and only changes through its
//! operations or a [`PreferenceCommand`].

pub mod color;
pub mod command;
pub mod content;
pub mod error;
pub mod orientation;
pub mod profiles;
pub mod store;

pub use color::{ColorAdjustments, ColorTarget, Contrast, Saturation};
pub use command::{PreferenceCommand, ResettableField};
pub use content::{Alignment, ContentAdjustments, ContentToggle, NumericField, DEFAULT_STEP};
pub use error::PreferenceError;
pub use orientation::{OrientationAdjustments, OrientationToggle, UsefulLink};
pub use profiles::{ProfileId, ProfileSet};
pub use store::PreferencesStore;
