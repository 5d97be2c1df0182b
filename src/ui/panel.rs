//! Accessibility overlay panel.
//!
//! The panel reads the store and returns the commands the user triggered
//! this frame. It never mutates the store itself.

use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

use crate::preferences::color::SWATCHES;
use crate::preferences::{
    Alignment, ColorTarget, ContentToggle, Contrast, NumericField, OrientationToggle,
    PreferenceCommand, PreferencesStore, ProfileId, ResettableField, Saturation, UsefulLink,
};
use crate::ui::theme::{Icon, IconSet, WidgetPalette, WidgetVariant};
use crate::ui::widgets::{
    stepper, AccessibleButton, AccessibleButtonStyle, AccessibleIconButton, StepperAction,
    ToggleTile,
};

/// Width of the open panel.
pub const PANEL_WIDTH: f32 = 400.0;

/// Overlay panel bound to a preferences store.
#[derive(Debug, Clone)]
pub struct OverlayPanel {
    variant: WidgetVariant,
    step: i32,
}

impl OverlayPanel {
    pub fn new(variant: WidgetVariant, step: i32) -> Self {
        Self { variant, step }
    }

    pub fn variant(&self) -> WidgetVariant {
        self.variant
    }

    /// Render the launcher button and, if open, the panel.
    pub fn show(&self, ctx: &egui::Context, store: &PreferencesStore) -> Vec<PreferenceCommand> {
        let mut commands = Vec::new();
        let palette = self.variant.palette();
        let icons = self.variant.icons();

        egui::Area::new(egui::Id::new("a11y_launcher"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let button = AccessibleIconButton::new(
                    icons.glyph(Icon::Launcher),
                    "Accessibility adjustments",
                    AccessibleButtonStyle::primary(&palette),
                )
                .icon_size(28.0)
                .badge(store.active_count());
                if ui.add(button).clicked() {
                    commands.push(PreferenceCommand::ToggleWidget);
                }
            });

        if store.is_widget_open() {
            egui::SidePanel::right("a11y_panel")
                .exact_width(PANEL_WIDTH)
                .resizable(false)
                .frame(egui::Frame::new().fill(palette.panel_bg).inner_margin(12.0))
                .show(ctx, |ui| {
                    self.render_header(ui, &palette, icons, &mut commands);
                    ScrollArea::vertical().show(ui, |ui| {
                        self.render_profiles(ui, store, &palette, icons, &mut commands);
                        ui.add_space(8.0);
                        self.render_content(ui, store, &palette, icons, &mut commands);
                        ui.add_space(8.0);
                        self.render_colors(ui, store, &palette, icons, &mut commands);
                        ui.add_space(8.0);
                        self.render_orientation(ui, store, &palette, icons, &mut commands);
                        ui.add_space(12.0);
                        self.render_footer(ui, &palette, icons, &mut commands);
                    });
                });
        }

        commands
    }

    fn render_header(
        &self,
        ui: &mut Ui,
        palette: &WidgetPalette,
        icons: IconSet,
        commands: &mut Vec<PreferenceCommand>,
    ) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Accessibility Adjustments")
                    .size(18.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add(AccessibleIconButton::new(
                        icons.glyph(Icon::Close),
                        "Close accessibility adjustments",
                        AccessibleButtonStyle::secondary(palette),
                    ))
                    .clicked()
                {
                    commands.push(PreferenceCommand::ToggleWidget);
                }
            });
        });
        ui.separator();
    }

    fn render_profiles(
        &self,
        ui: &mut Ui,
        store: &PreferencesStore,
        palette: &WidgetPalette,
        icons: IconSet,
        commands: &mut Vec<PreferenceCommand>,
    ) {
        section(ui, "Choose the right accessibility profile for you", palette, |ui| {
            for id in ProfileId::ALL {
                let mut active = store.profiles().is_active(id);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icons.glyph(Icon::Profile(id))).color(palette.accent));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(id.label()).strong().color(palette.text_primary));
                        ui.label(
                            RichText::new(id.description())
                                .small()
                                .color(palette.text_secondary),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.checkbox(&mut active, "").changed() {
                            commands.push(PreferenceCommand::ToggleProfile(id));
                        }
                    });
                });
            }
        });
    }

    fn render_content(
        &self,
        ui: &mut Ui,
        store: &PreferencesStore,
        palette: &WidgetPalette,
        icons: IconSet,
        commands: &mut Vec<PreferenceCommand>,
    ) {
        let content = store.content();
        section(ui, "Content Adjustments", palette, |ui| {
            for field in NumericField::ALL {
                let action = stepper(
                    ui,
                    icons.glyph(Icon::Numeric(field)),
                    field.label(),
                    content.numeric(field),
                    palette,
                    icons,
                );
                match action {
                    Some(StepperAction::Decrease) => commands.push(PreferenceCommand::Adjust {
                        field,
                        delta: -self.step,
                    }),
                    Some(StepperAction::Increase) => commands.push(PreferenceCommand::Adjust {
                        field,
                        delta: self.step,
                    }),
                    Some(StepperAction::Reset) => {
                        commands.push(PreferenceCommand::Reset(field.into()))
                    }
                    None => {}
                }
            }

            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for field in ContentToggle::ALL {
                    let tile = ToggleTile::new(
                        icons.glyph(Icon::Content(field)),
                        field.label(),
                        content.flag(field),
                        *palette,
                    );
                    if ui.add(tile).clicked() {
                        commands.push(PreferenceCommand::ToggleContent(field));
                    }
                }
            });

            ui.add_space(6.0);
            ui.label(RichText::new("Text Alignment").strong().color(palette.text_primary));
            ui.horizontal(|ui| {
                let gap = ui.spacing().item_spacing.x;
                let count = Alignment::ALL.len() as f32;
                let tile_width = (ui.available_width() - gap * (count - 1.0)) / count;
                for align in Alignment::ALL {
                    let label = match align {
                        Alignment::Left => "Align Left",
                        Alignment::Center => "Align Center",
                        Alignment::Right => "Align Right",
                    };
                    let tile = ToggleTile::new(
                        icons.glyph(Icon::Alignment(align)),
                        label,
                        content.alignment == align,
                        *palette,
                    )
                    .width(tile_width);
                    if ui.add(tile).clicked() {
                        commands.push(PreferenceCommand::SetAlignment(align));
                    }
                }
            });
        });
    }

    fn render_colors(
        &self,
        ui: &mut Ui,
        store: &PreferencesStore,
        palette: &WidgetPalette,
        icons: IconSet,
        commands: &mut Vec<PreferenceCommand>,
    ) {
        let colors = store.colors();
        section(ui, "Color Adjustments", palette, |ui| {
            ui.horizontal_wrapped(|ui| {
                for contrast in Contrast::ALL {
                    let tile = ToggleTile::new(
                        icons.glyph(Icon::Contrast(contrast)),
                        contrast.label(),
                        colors.contrast == Some(contrast),
                        *palette,
                    );
                    if ui.add(tile).clicked() {
                        commands.push(PreferenceCommand::SetContrast(contrast));
                    }
                }
                for saturation in Saturation::ALL {
                    let tile = ToggleTile::new(
                        icons.glyph(Icon::Saturation(saturation)),
                        saturation.label(),
                        colors.saturation == Some(saturation),
                        *palette,
                    );
                    if ui.add(tile).clicked() {
                        commands.push(PreferenceCommand::SetSaturation(saturation));
                    }
                }
            });

            for target in ColorTarget::ALL {
                ui.add_space(6.0);
                ui.label(RichText::new(target.label()).strong().color(palette.text_primary));
                ui.horizontal_wrapped(|ui| {
                    let current = colors.color(target);
                    for swatch in SWATCHES {
                        if swatch_button(ui, swatch, swatch == current, palette).clicked() {
                            commands.push(PreferenceCommand::SetColor {
                                target,
                                color: swatch,
                            });
                        }
                    }

                    let mut custom = current;
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut custom,
                        egui::color_picker::Alpha::Opaque,
                    )
                    .changed()
                    {
                        commands.push(PreferenceCommand::SetColor {
                            target,
                            color: custom,
                        });
                    }

                    if ui.small_button("Cancel").clicked() {
                        commands.push(PreferenceCommand::Reset(ResettableField::Color(target)));
                    }
                });
            }
        });
    }

    fn render_orientation(
        &self,
        ui: &mut Ui,
        store: &PreferencesStore,
        palette: &WidgetPalette,
        icons: IconSet,
        commands: &mut Vec<PreferenceCommand>,
    ) {
        let orientation = store.orientation();
        section(ui, "Orientation Adjustments", palette, |ui| {
            ui.horizontal_wrapped(|ui| {
                for field in OrientationToggle::ALL {
                    let tile = ToggleTile::new(
                        icons.glyph(Icon::Orientation(field)),
                        field.label(),
                        orientation.flag(field),
                        *palette,
                    );
                    if ui.add(tile).clicked() {
                        commands.push(PreferenceCommand::ToggleOrientation(field));
                    }
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(icons.glyph(Icon::UsefulLink)).color(palette.accent));
                ui.label(RichText::new("Useful Links").strong().color(palette.text_primary));

                let selected = orientation
                    .useful_link
                    .map(|link| link.label())
                    .unwrap_or("Select an option");
                egui::ComboBox::from_id_salt("a11y_useful_link")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        if ui
                            .selectable_label(orientation.useful_link.is_none(), "Select an option")
                            .clicked()
                        {
                            commands.push(PreferenceCommand::SetUsefulLink(None));
                        }
                        for link in UsefulLink::ALL {
                            if ui
                                .selectable_label(orientation.useful_link == Some(link), link.label())
                                .clicked()
                            {
                                commands.push(PreferenceCommand::SetUsefulLink(Some(link)));
                            }
                        }
                    });
            });
        });
    }

    fn render_footer(
        &self,
        ui: &mut Ui,
        palette: &WidgetPalette,
        icons: IconSet,
        commands: &mut Vec<PreferenceCommand>,
    ) {
        ui.vertical_centered(|ui| {
            let reset = AccessibleButton::new("Reset Settings", AccessibleButtonStyle::primary(palette))
                .icon(icons.glyph(Icon::Reset))
                .min_size(egui::vec2(PANEL_WIDTH - 48.0, 44.0));
            if ui.add(reset).clicked() {
                commands.push(PreferenceCommand::ResetAll);
            }
        });
    }
}

/// Grouped section with a heading.
fn section(ui: &mut Ui, title: &str, palette: &WidgetPalette, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(palette.card_bg)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).size(15.0).strong().color(palette.text_primary));
            ui.add_space(6.0);
            add_contents(ui);
        });
}

/// Small square swatch button.
fn swatch_button(ui: &mut Ui, color: Color32, selected: bool, palette: &WidgetPalette) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(26.0, 26.0), egui::Sense::click());
    response.widget_info(|| {
        egui::WidgetInfo::selected(
            egui::WidgetType::RadioButton,
            true,
            selected,
            crate::preferences::color::format_hex_color(color),
        )
    });

    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 13.0, color);
        let stroke = if selected || response.has_focus() {
            egui::Stroke::new(2.5, palette.accent)
        } else {
            egui::Stroke::new(1.0, palette.border)
        };
        ui.painter()
            .rect_stroke(rect, 13.0, stroke, egui::StrokeKind::Outside);
    }

    response
}
