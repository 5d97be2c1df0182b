//! UI module for the egui landing page and accessibility overlay.

pub mod landing;
pub mod overlays;
pub mod panel;
pub mod theme;
pub mod widgets;

pub use panel::OverlayPanel;
pub use theme::WidgetVariant;
