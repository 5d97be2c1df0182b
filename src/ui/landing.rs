//! Landing page content painted with the current presentation style.

use egui::text::LayoutJob;
use egui::{Color32, Layout, RichText, Sense, TextFormat, Ui};

use crate::preferences::UsefulLink;
use crate::presentation::PresentationStyle;
use crate::ui::theme::WidgetPalette;

/// Base sizes before scaling.
const TITLE_SIZE: f32 = 40.0;
const SUBTITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 22.0;
const BODY_SIZE: f32 = 15.0;

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Built for everyone",
        body: "Every page adapts to the way your visitors read, navigate and see.",
    },
    Feature {
        title: "Zero setup",
        body: "Drop the widget in and visitors can tune the page to their needs in seconds.",
    },
    Feature {
        title: "Nothing stored",
        body: "Adjustments live only for the current visit and are gone when the page closes.",
    },
];

/// Render the landing page.
pub fn show(ui: &mut Ui, style: &PresentationStyle, palette: &WidgetPalette) {
    ui.with_layout(Layout::top_down(style.align), |ui| {
        ui.add_space(32.0);
        title(ui, "Accessible by default", TITLE_SIZE, style, palette);
        paragraph(
            ui,
            "A landing page that respects how people actually use the web.",
            SUBTITLE_SIZE,
            style,
        );

        if !style.read_mode && !style.hide_images {
            ui.add_space(16.0);
            hero_image(ui, style, palette);
        }

        ui.add_space(24.0);
        for feature in &FEATURES {
            title(ui, feature.title, HEADING_SIZE, style, palette);
            paragraph(ui, feature.body, BODY_SIZE, style);
            ui.add_space(12.0);
        }

        if !style.read_mode {
            media_card(ui, style, palette);
            ui.add_space(12.0);
        }

        link(ui, "Start your free trial", None, style, palette);

        ui.add_space(32.0);
        ui.separator();
        ui.horizontal(|ui| {
            for target in UsefulLink::ALL {
                link(ui, target.label(), Some(target), style, palette);
                ui.add_space(16.0);
            }
        });
    });
}

fn text_job(text: &str, size: f32, color: Color32, style: &PresentationStyle) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(
        text,
        0.0,
        TextFormat {
            font_id: style.font_id(size),
            color,
            extra_letter_spacing: style.letter_spacing,
            line_height: Some(style.line_height_for(size)),
            ..Default::default()
        },
    );
    job.halign = style.align;
    job
}

fn title(ui: &mut Ui, text: &str, size: f32, style: &PresentationStyle, palette: &WidgetPalette) {
    let job = text_job(text, size, style.title_color, style);
    let response = hoverable(ui, job, text, size, style);
    if style.highlight_titles {
        ui.painter().rect_stroke(
            response.rect.expand(4.0),
            4.0,
            egui::Stroke::new(2.0, palette.accent),
            egui::StrokeKind::Outside,
        );
    }
}

fn paragraph(ui: &mut Ui, text: &str, size: f32, style: &PresentationStyle) {
    let job = text_job(text, size, style.text_color, style);
    hoverable(ui, job, text, size, style);
}

fn link(
    ui: &mut Ui,
    text: &str,
    target: Option<UsefulLink>,
    style: &PresentationStyle,
    palette: &WidgetPalette,
) {
    let color = style.visuals.hyperlink_color;
    let job = text_job(text, BODY_SIZE, color, style);
    let response = hoverable(ui, job, text, BODY_SIZE, style);

    let chosen = target.is_some() && target == style.useful_link;
    if style.highlight_links || chosen {
        ui.painter().rect_filled(
            response.rect.expand(2.0),
            2.0,
            style.filter(palette.accent.linear_multiply(0.25)),
        );
        ui.painter().line_segment(
            [response.rect.left_bottom(), response.rect.right_bottom()],
            egui::Stroke::new(2.0, color),
        );
    }
    if chosen {
        response.scroll_to_me(Some(egui::Align::Center));
    }
}

/// Text label that reacts to the hover highlight and magnifier settings.
fn hoverable(
    ui: &mut Ui,
    job: LayoutJob,
    text: &str,
    size: f32,
    style: &PresentationStyle,
) -> egui::Response {
    let response = ui.add(egui::Label::new(job).sense(Sense::hover()));

    if style.highlight_hover && response.hovered() {
        ui.painter().rect_stroke(
            response.rect.expand(3.0),
            3.0,
            egui::Stroke::new(2.0, Color32::from_rgb(255, 165, 0)),
            egui::StrokeKind::Outside,
        );
    }

    match style.magnifier_scale {
        Some(scale) => response.on_hover_ui_at_pointer(|ui| {
            ui.label(
                RichText::new(text)
                    .font(style.font_id(size * scale * 1.5))
                    .color(Color32::WHITE)
                    .background_color(Color32::BLACK),
            );
        }),
        None => response,
    }
}

fn hero_image(ui: &mut Ui, style: &PresentationStyle, palette: &WidgetPalette) {
    let width = ui.available_width().min(640.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 180.0), Sense::hover());
    let fill = style.filter(palette.accent.linear_multiply(0.35));
    ui.painter().rect_filled(rect, 12.0, fill);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Product screenshot",
        style.font_id(16.0),
        style.text_color,
    );
}

fn media_card(ui: &mut Ui, style: &PresentationStyle, palette: &WidgetPalette) {
    let speaker = if style.mute_sounds { "🔇" } else { "🔊" };
    egui::Frame::new()
        .fill(palette.card_bg)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{speaker} Watch the two minute product tour"))
                    .font(style.font_id(BODY_SIZE))
                    .color(style.text_color),
            );
        });
}
