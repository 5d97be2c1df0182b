//! Main application state and egui integration.

use std::collections::BTreeMap;

use eframe::egui;

use a11y_overlay::config::AppConfig;
use a11y_overlay::preferences::{PreferenceCommand, PreferencesStore};
use a11y_overlay::presentation::PresentationStyle;
use a11y_overlay::ui::{landing, overlays, OverlayPanel};

/// Main application state.
pub struct OverlayApp {
    /// Accessibility preferences for this session
    store: PreferencesStore,
    /// Overlay panel
    panel: OverlayPanel,
    /// Unscaled text styles, the base for font size adjustments
    base_text_styles: BTreeMap<egui::TextStyle, egui::FontId>,
}

impl OverlayApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        cc.egui_ctx.set_visuals(config.variant.visuals());
        tracing::info!(variant = %config.variant, step = config.numeric_step, "Overlay ready");

        Self {
            store: PreferencesStore::new(),
            panel: OverlayPanel::new(config.variant, config.numeric_step),
            base_text_styles: cc.egui_ctx.style().text_styles.clone(),
        }
    }

    /// Keyboard shortcuts: Ctrl+U opens or closes the panel, Escape closes it.
    fn shortcut_commands(&self, ctx: &egui::Context) -> Option<PreferenceCommand> {
        let (toggle, escape) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if toggle || (escape && self.store.is_widget_open()) {
            Some(PreferenceCommand::ToggleWidget)
        } else {
            None
        }
    }

    fn apply_global_style(&self, ctx: &egui::Context, style: &PresentationStyle) {
        ctx.style_mut(|s| {
            s.animation_time = style.animation_time;
            let focus_width = if style.highlight_focus { 3.0 } else { 1.0 };
            s.visuals.selection.stroke.width = focus_width;
            s.visuals.widgets.hovered.bg_stroke.width = focus_width;
        });
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let variant = self.panel.variant();
        let style = PresentationStyle::from_preferences(&self.store, variant);
        self.apply_global_style(ctx, &style);

        if let Some(command) = self.shortcut_commands(ctx) {
            self.store.apply(command);
        }

        // Panel first so the central page fills the remaining space
        let commands = self.panel.show(ctx, &self.store);

        let frame = egui::Frame::central_panel(&ctx.style()).fill(style.background_color);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.style_mut().visuals = style.visuals.clone();
            ui.style_mut().text_styles = style.scaled_text_styles(&self.base_text_styles);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    landing::show(ui, &style, &variant.palette());
                });
        });

        overlays::paint(ctx, &style, variant.palette().accent);

        if !commands.is_empty() {
            for command in commands {
                self.store.apply(command);
            }
            ctx.request_repaint();
        }
    }
}
