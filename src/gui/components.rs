use super::models::QmtGui;
use crate::form::{FormPhase, Status};
use crate::gui::logging::LogEntry;
use eframe::egui::{
    Align, Button, Color32, ComboBox, Frame, Key, Layout, RichText, ScrollArea, Ui,
};
use tracing::Level;

const COMPONENT_WIDTH: f32 = 240.0;
const ACCENT: Color32 = Color32::from_rgb(255, 165, 0);
const MUTED: Color32 = Color32::from_gray(120);

pub struct TemplateSelectionComponent;

impl TemplateSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut QmtGui) {
        ui.label("Select Template:");

        let names: Vec<String> = app.config.template_names().map(str::to_string).collect();
        if names.is_empty() {
            ui.label(
                RichText::new(format!(
                    "No templates in {}",
                    app.config_path.to_string_lossy()
                ))
                .color(MUTED),
            );
            return;
        }

        let before = app.form.template.clone();
        ComboBox::from_id_salt("template")
            .width(COMPONENT_WIDTH)
            .selected_text(before.clone().unwrap_or_default())
            .show_ui(ui, |ui| {
                for name in &names {
                    ui.selectable_value(&mut app.form.template, Some(name.clone()), name.as_str());
                }
            });

        if app.form.template != before {
            app.template_changed();
        }
    }
}

pub struct SceneIdComponent;

impl SceneIdComponent {
    pub fn render(ui: &mut Ui, app: &mut QmtGui) {
        ui.label("Scene ID:");

        let response = ui.add(
            eframe::egui::TextEdit::singleline(&mut app.form.scene_id_input)
                .desired_width(COMPONENT_WIDTH)
                .hint_text("e.g. 1234"),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if ui.button("Get Scene").clicked() || submitted {
            app.fetch_scene();
        }
    }
}

pub struct ChecklistComponent;

impl ChecklistComponent {
    pub fn render(ui: &mut Ui, app: &mut QmtGui) {
        let Some(scene) = &app.form.scene else {
            return;
        };
        let scene_id = scene.id;

        if app.form.checklist.is_empty() {
            ui.label(
                RichText::new(format!("Scene {scene_id} already has every template tag"))
                    .color(MUTED),
            );
        } else {
            ScrollArea::vertical()
                .id_salt("checklist")
                .max_height(320.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for check in app.form.checklist.iter_mut() {
                        ui.checkbox(&mut check.checked, check.name.as_str());
                    }
                });
        }

        let applied = app.form.applied_names(&app.config);
        if !applied.is_empty() {
            ui.label(
                RichText::new(format!("Already on scene: {}", applied.join(", ")))
                    .color(MUTED)
                    .size(11.0),
            );
        }
    }
}

pub struct SubmitComponent;

impl SubmitComponent {
    pub fn render(ui: &mut Ui, app: &mut QmtGui) {
        let loaded = app.form.scene.is_some();
        if ui.add_enabled(loaded, Button::new("Set tags")).clicked() {
            app.set_tags();
        }

        if let Some(status) = &app.form.status {
            let color = match status {
                Status::Success(_) => Color32::from_rgb(100, 200, 100),
                Status::Warning(_) => Color32::from_rgb(255, 200, 100),
                Status::Error(_) => Color32::from_rgb(255, 100, 100),
            };
            ui.label(RichText::new(status.message()).color(color));
        }
    }
}

fn format_log_entry(entry: &LogEntry) -> RichText {
    let color = match entry.level {
        Level::ERROR => Color32::from_rgb(255, 100, 100),
        Level::WARN => Color32::from_rgb(255, 200, 100),
        Level::INFO => Color32::from_rgb(100, 200, 255),
        Level::DEBUG => Color32::from_rgb(150, 150, 150),
        Level::TRACE => Color32::from_rgb(100, 100, 100),
    };

    RichText::new(format!(
        "[{}] {} {}: {}",
        entry.timestamp, entry.level, entry.target, entry.message
    ))
    .color(color)
    .monospace()
}

pub struct LogPanelComponent;

impl LogPanelComponent {
    pub fn render(ui: &mut Ui, app: &mut QmtGui) {
        ui.horizontal(|ui| {
            ui.label("Log Output");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.selectable_value(&mut app.min_log_level, Level::ERROR, "ERROR");
                ui.selectable_value(&mut app.min_log_level, Level::WARN, "WARN");
                ui.selectable_value(&mut app.min_log_level, Level::INFO, "INFO");
                ui.selectable_value(&mut app.min_log_level, Level::DEBUG, "DEBUG");
                ui.selectable_value(&mut app.min_log_level, Level::TRACE, "ALL");

                let total = app.log_messages.len();
                if total > 0 {
                    let visible = app.visible_logs().count();
                    ui.label(format!("({} visible / {} total)", visible, total));
                }
            });
        });

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt("log_output")
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if app.log_messages.is_empty() {
                        ui.label(RichText::new("No log messages").color(MUTED));
                    } else {
                        for entry in app.visible_logs() {
                            ui.label(format_log_entry(entry));
                        }
                    }
                });
        });
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &mut QmtGui) {
        ui.horizontal(|ui| {
            let (text, color) = match app.form.phase() {
                FormPhase::Idle => ("Ready".to_string(), Color32::from_rgb(100, 200, 100)),
                FormPhase::SceneLoaded => (
                    format!(
                        "Scene loaded: {} tag(s) checked",
                        app.form.checked_count()
                    ),
                    ACCENT,
                ),
                FormPhase::TagsSubmitted => {
                    ("Tags submitted".to_string(), Color32::from_rgb(100, 200, 100))
                }
            };
            ui.label(RichText::new(text).color(color).size(14.0));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Save Logs").clicked() {
                    if let Err(e) = app.save_logs_to_file() {
                        tracing::error!("Failed to save logs: {}", e);
                    }
                }

                if ui.button("Clear").clicked() {
                    app.log_messages.clear();
                }
            });
        });
    }
}
