//! Presentation of accessibility preferences.
//!
//! Turns a [`PreferencesStore`](crate::preferences::PreferencesStore) into
//! concrete render parameters for the page:
//! - Contrast visuals
//! - Saturation color filters
//! - Typography and cursor settings

pub mod contrast;
pub mod saturation;
pub mod style;

pub use contrast::{contrast_ratio, meets_aa, meets_aaa, HighContrastColors};
pub use saturation::SaturationFilter;
pub use style::{CursorSize, PresentationStyle};
