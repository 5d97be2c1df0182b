//! Pointer-following overlays: reading guide, reading mask and big cursor.

use egui::{Color32, CursorIcon, Id, LayerId, Order, Pos2, Rect, Shape, Stroke, Vec2};

use crate::presentation::{CursorSize, PresentationStyle};

/// Height of the clear band left by the reading mask.
const MASK_BAND: f32 = 120.0;
/// Height of the reading guide bar.
const GUIDE_HEIGHT: f32 = 10.0;
/// Length of the big cursor arrow.
const CURSOR_LENGTH: f32 = 40.0;

/// Paint overlays for the current style on top of everything else.
pub fn paint(ctx: &egui::Context, style: &PresentationStyle, accent: Color32) {
    let Some(pointer) = ctx.pointer_hover_pos() else {
        return;
    };
    let screen = ctx.content_rect();
    let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("a11y_overlays")));

    if style.reading_mask {
        let dim = Color32::from_black_alpha(170);
        let top = pointer.y - MASK_BAND / 2.0;
        let bottom = pointer.y + MASK_BAND / 2.0;
        painter.rect_filled(
            Rect::from_min_max(screen.min, Pos2::new(screen.max.x, top)),
            0.0,
            dim,
        );
        painter.rect_filled(
            Rect::from_min_max(Pos2::new(screen.min.x, bottom), screen.max),
            0.0,
            dim,
        );
    }

    if style.reading_guide {
        let bar = Rect::from_center_size(
            Pos2::new(pointer.x, pointer.y + GUIDE_HEIGHT * 2.0),
            Vec2::new(screen.width().min(520.0), GUIDE_HEIGHT),
        );
        painter.rect_filled(bar, 4.0, style.filter(accent));
        painter.rect_stroke(
            bar,
            4.0,
            Stroke::new(1.0, Color32::BLACK),
            egui::StrokeKind::Outside,
        );
    }

    if let Some(points) = big_cursor_shape(style.cursor, pointer) {
        let (fill, outline) = match style.cursor {
            CursorSize::BigWhite => (Color32::WHITE, Color32::BLACK),
            _ => (Color32::BLACK, Color32::WHITE),
        };
        ctx.set_cursor_icon(CursorIcon::None);
        painter.add(Shape::convex_polygon(points, fill, Stroke::new(2.0, outline)));
    }
}

/// Arrow outline for a big cursor, tip at the pointer.
pub fn big_cursor_shape(cursor: CursorSize, tip: Pos2) -> Option<Vec<Pos2>> {
    match cursor {
        CursorSize::Normal => None,
        CursorSize::BigBlack | CursorSize::BigWhite => Some(vec![
            tip,
            tip + Vec2::new(0.0, CURSOR_LENGTH),
            tip + Vec2::new(CURSOR_LENGTH * 0.7, CURSOR_LENGTH * 0.7),
        ]),
    }
}
