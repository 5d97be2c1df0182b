//! Saturation filters applied to page colors.

use egui::Color32;

use crate::preferences::Saturation;

/// Chroma multiplier for each saturation mode.
fn chroma_factor(mode: Saturation) -> f32 {
    match mode {
        Saturation::High => 1.5,
        Saturation::Low => 0.5,
        Saturation::Monochrome => 0.0,
    }
}

/// Rec. 601 luma of a color, 0-255.
pub fn luma(color: Color32) -> f32 {
    0.299 * color.r() as f32 + 0.587 * color.g() as f32 + 0.114 * color.b() as f32
}

/// Apply a saturation mode to a color. Alpha is kept.
pub fn apply(mode: Option<Saturation>, color: Color32) -> Color32 {
    let Some(mode) = mode else {
        return color;
    };

    let factor = chroma_factor(mode);
    let y = luma(color);
    let channel = |c: u8| (y + (c as f32 - y) * factor).round().clamp(0.0, 255.0) as u8;

    Color32::from_rgba_unmultiplied(
        channel(color.r()),
        channel(color.g()),
        channel(color.b()),
        color.a(),
    )
}

/// Trait for anything that can filter colors through the active saturation.
pub trait SaturationFilter {
    /// Current saturation mode.
    fn saturation(&self) -> Option<Saturation>;

    /// Filter a color through the current mode.
    fn filter(&self, color: Color32) -> Color32 {
        apply(self.saturation(), color)
    }
}

impl SaturationFilter for crate::preferences::ColorAdjustments {
    fn saturation(&self) -> Option<Saturation> {
        self.saturation
    }
}
