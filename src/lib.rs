//! Accessibility adjustments overlay.
//!
//! A landing page with an embedded accessibility widget. Visitors adjust
//! font size, spacing, contrast, saturation, cursor size and other reading
//! aids; the page re-renders with the new presentation immediately. All
//! preferences live in memory for the current session only.

pub mod config;
pub mod preferences;
pub mod presentation;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use preferences::{PreferenceCommand, PreferenceError, PreferencesStore};
pub use presentation::PresentationStyle;
pub use ui::{OverlayPanel, WidgetVariant};
