use super::components::*;
use super::models::QmtGui;
use crate::gui::logging::drain_into;
use eframe::egui;

impl eframe::App for QmtGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.override_text_color = Some(egui::Color32::from_gray(220));
        style.visuals.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(40, 40, 40);
        style.visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(50, 50, 50);
        style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(60, 60, 60);
        style.visuals.widgets.active.bg_fill = egui::Color32::from_rgb(70, 70, 70);
        style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 30);
        style.visuals.window_fill = egui::Color32::from_rgb(25, 25, 25);
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(20, 20, 20);
        ctx.set_style(style);

        if drain_into(&mut self.log_messages) {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("stash-qmt")
                        .size(28.0)
                        .color(egui::Color32::from_gray(220))
                        .strong(),
                );
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(10.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(&self.config.credentials.stash_url)
                            .size(10.0)
                            .color(egui::Color32::from_gray(150)),
                    );
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            FooterComponent::render(ui, self);
        });

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                LogPanelComponent::render(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(5.0);
            TemplateSelectionComponent::render(ui, self);
            ui.add_space(5.0);
            SceneIdComponent::render(ui, self);
            ui.separator();
            ChecklistComponent::render(ui, self);
            ui.add_space(5.0);
            SubmitComponent::render(ui, self);
        });
    }
}
