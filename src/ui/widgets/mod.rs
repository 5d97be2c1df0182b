//! Reusable overlay widgets.

pub mod accessible_button;
pub mod stepper;
pub mod toggle_tile;

pub use accessible_button::{
    AccessibleButton, AccessibleButtonStyle, AccessibleIconButton, MIN_TOUCH_TARGET,
};
pub use stepper::{stepper, StepperAction};
pub use toggle_tile::ToggleTile;
