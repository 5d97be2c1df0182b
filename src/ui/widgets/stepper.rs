//! Stepper row: decrease, current percentage, increase, reset.

use egui::{Align, Layout, RichText, Ui};

use super::accessible_button::{AccessibleButtonStyle, AccessibleIconButton};
use crate::ui::theme::{Icon, IconSet, WidgetPalette};

/// Which stepper button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperAction {
    Decrease,
    Increase,
    Reset,
}

/// Render a stepper row for a percentage value.
pub fn stepper(
    ui: &mut Ui,
    glyph: &str,
    label: &str,
    value: u32,
    palette: &WidgetPalette,
    icons: IconSet,
) -> Option<StepperAction> {
    let mut action = None;
    let style = AccessibleButtonStyle::secondary(palette);

    ui.horizontal(|ui| {
        ui.label(RichText::new(glyph).color(palette.accent));
        ui.label(RichText::new(label).color(palette.text_primary));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let reset_label = format!("Reset {label}");
            if ui
                .add(AccessibleIconButton::new(
                    icons.glyph(Icon::Reset),
                    &reset_label,
                    style.clone(),
                ))
                .clicked()
            {
                action = Some(StepperAction::Reset);
            }
            let increase_label = format!("Increase {label}");
            if ui
                .add(AccessibleIconButton::new(
                    icons.glyph(Icon::Increase),
                    &increase_label,
                    AccessibleButtonStyle::primary(palette),
                ))
                .clicked()
            {
                action = Some(StepperAction::Increase);
            }
            ui.label(
                RichText::new(format!("{value}%"))
                    .strong()
                    .color(palette.text_primary),
            );
            let decrease_label = format!("Decrease {label}");
            if ui
                .add(AccessibleIconButton::new(
                    icons.glyph(Icon::Decrease),
                    &decrease_label,
                    AccessibleButtonStyle::primary(palette),
                ))
                .clicked()
            {
                action = Some(StepperAction::Decrease);
            }
        });
    });

    action
}
