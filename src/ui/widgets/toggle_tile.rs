//! Square tile that shows an on/off or selected state.

use egui::{Response, Sense, StrokeKind, Ui, Vec2, Widget};

use super::accessible_button::MIN_TOUCH_TARGET;
use crate::ui::theme::WidgetPalette;

/// Height of a tile.
const TILE_HEIGHT: f32 = 76.0;

pub struct ToggleTile<'a> {
    glyph: &'a str,
    label: &'a str,
    selected: bool,
    palette: WidgetPalette,
    width: f32,
}

impl<'a> ToggleTile<'a> {
    pub fn new(glyph: &'a str, label: &'a str, selected: bool, palette: WidgetPalette) -> Self {
        Self {
            glyph,
            label,
            selected,
            palette,
            width: 110.0,
        }
    }

    /// Stretch or shrink the tile, never below the minimum touch target.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(MIN_TOUCH_TARGET);
        self
    }
}

impl Widget for ToggleTile<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            glyph,
            label,
            selected,
            palette,
            width,
        } = self;

        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, TILE_HEIGHT), Sense::click());
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), selected, label)
        });

        if ui.is_rect_visible(rect) {
            let (fill, text) = if selected {
                (palette.accent, palette.on_accent)
            } else if response.hovered() {
                (palette.border, palette.text_primary)
            } else {
                (palette.card_bg, palette.text_primary)
            };

            ui.painter().rect_filled(rect, 8.0, fill);
            let stroke_color = if response.has_focus() {
                palette.text_primary
            } else {
                palette.border
            };
            ui.painter().rect_stroke(
                rect,
                8.0,
                egui::Stroke::new(if response.has_focus() { 2.0 } else { 1.0 }, stroke_color),
                StrokeKind::Inside,
            );

            ui.painter().text(
                rect.center_top() + Vec2::new(0.0, 22.0),
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(20.0),
                text,
            );

            let galley = ui.painter().layout(
                label.to_string(),
                egui::FontId::proportional(12.0),
                text,
                width - 8.0,
            );
            let pos = egui::pos2(rect.center().x - galley.size().x / 2.0, rect.top() + 40.0);
            ui.painter().galley(pos, galley, text);
        }

        response
    }
}
