//! Accessible buttons with a 44x44 minimum touch target.

use egui::{Color32, Response, Sense, StrokeKind, Ui, Vec2, Widget};

use crate::ui::theme::WidgetPalette;

/// Minimum touch target size per WCAG 2.1 guidelines (44x44 CSS pixels).
pub const MIN_TOUCH_TARGET: f32 = 44.0;

/// Appearance of an accessible button.
#[derive(Debug, Clone)]
pub struct AccessibleButtonStyle {
    pub min_size: Vec2,
    pub bg_color: Color32,
    pub bg_hover: Color32,
    pub bg_pressed: Color32,
    pub text_color: Color32,
    pub focus_color: Color32,
    pub rounding: f32,
}

impl AccessibleButtonStyle {
    /// Accent button in the given palette.
    pub fn primary(palette: &WidgetPalette) -> Self {
        Self {
            min_size: Vec2::splat(MIN_TOUCH_TARGET),
            bg_color: palette.accent,
            bg_hover: palette.accent.gamma_multiply(0.85),
            bg_pressed: palette.accent.gamma_multiply(0.7),
            text_color: palette.on_accent,
            focus_color: palette.text_primary,
            rounding: 6.0,
        }
    }

    /// Subtle button on a card background.
    pub fn secondary(palette: &WidgetPalette) -> Self {
        Self {
            min_size: Vec2::splat(MIN_TOUCH_TARGET),
            bg_color: palette.card_bg,
            bg_hover: palette.border,
            bg_pressed: palette.card_bg.gamma_multiply(0.8),
            text_color: palette.text_primary,
            focus_color: palette.accent,
            rounding: 6.0,
        }
    }

    fn background(&self, response: &Response) -> Color32 {
        if response.is_pointer_button_down_on() {
            self.bg_pressed
        } else if response.hovered() {
            self.bg_hover
        } else {
            self.bg_color
        }
    }
}

/// Text button with a minimum touch target.
pub struct AccessibleButton<'a> {
    text: &'a str,
    icon: Option<&'a str>,
    style: AccessibleButtonStyle,
}

impl<'a> AccessibleButton<'a> {
    pub fn new(text: &'a str, style: AccessibleButtonStyle) -> Self {
        Self {
            text,
            icon: None,
            style,
        }
    }

    /// Set an icon to display before the text.
    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the minimum size.
    pub fn min_size(mut self, size: Vec2) -> Self {
        self.style.min_size = size;
        self
    }
}

impl Widget for AccessibleButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self { text, icon, style } = self;

        let label = match icon {
            Some(icon) => format!("{icon}  {text}"),
            None => text.to_string(),
        };
        let galley = ui.painter().layout_no_wrap(
            label.clone(),
            egui::FontId::default(),
            style.text_color,
        );

        let padding = Vec2::new(16.0, 8.0);
        let content_size = galley.size() + padding * 2.0;
        let size = content_size.max(style.min_size);

        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, ui.is_enabled(), text)
        });

        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, style.rounding, style.background(&response));

            if response.has_focus() {
                ui.painter().rect_stroke(
                    rect,
                    style.rounding,
                    egui::Stroke::new(2.0, style.focus_color),
                    StrokeKind::Outside,
                );
            }

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::default(),
                style.text_color,
            );
        }

        response
    }
}

/// Round icon button, optionally with a count badge.
pub struct AccessibleIconButton<'a> {
    icon: &'a str,
    accessible_label: &'a str,
    style: AccessibleButtonStyle,
    icon_size: f32,
    badge: Option<usize>,
}

impl<'a> AccessibleIconButton<'a> {
    pub fn new(icon: &'a str, accessible_label: &'a str, style: AccessibleButtonStyle) -> Self {
        Self {
            icon,
            accessible_label,
            style,
            icon_size: 20.0,
            badge: None,
        }
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    /// Show a count in the top right corner. Zero hides the badge.
    pub fn badge(mut self, count: usize) -> Self {
        self.badge = (count > 0).then_some(count);
        self
    }
}

impl Widget for AccessibleIconButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            icon,
            accessible_label,
            style,
            icon_size,
            badge,
        } = self;

        let size = Vec2::splat(style.min_size.x.max(icon_size + 16.0));
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, ui.is_enabled(), accessible_label)
        });

        if ui.is_rect_visible(rect) {
            let radius = size.x / 2.0;
            ui.painter()
                .circle_filled(rect.center(), radius, style.background(&response));

            if response.has_focus() {
                ui.painter().circle_stroke(
                    rect.center(),
                    radius + 2.0,
                    egui::Stroke::new(2.0, style.focus_color),
                );
            }

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(icon_size),
                style.text_color,
            );

            if let Some(count) = badge {
                let center = rect.right_top() + Vec2::new(-6.0, 6.0);
                ui.painter().circle_filled(center, 9.0, Color32::from_rgb(220, 53, 69));
                ui.painter().text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    count.to_string(),
                    egui::FontId::proportional(11.0),
                    Color32::WHITE,
                );
            }
        }

        response.on_hover_text(accessible_label)
    }
}
