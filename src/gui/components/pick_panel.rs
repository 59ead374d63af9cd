// src/gui/components/pick_panel.rs
//
// Randomize / table toggle / copy, plus the framed "selected bar" card.

use eframe::egui::{self, RichText};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let enabled = app.selector.is_some();
        if ui.add_enabled(enabled, egui::Button::new(RichText::new("Randomize Bar!").strong())).clicked() {
            actions::pick_random(app);
        }

        if ui.checkbox(&mut app.state.gui.show_table, "Show options").changed() {
            logd!("UI: show_table → {}", app.state.gui.show_table);
            app.persist();
        }

        ui.separator();

        let fmt = &mut app.state.gui.copy_format;
        ui.selectable_value(fmt, ExportFormat::Tsv, "TSV");
        ui.selectable_value(fmt, ExportFormat::Csv, "CSV");
        if ui.button("Copy").on_hover_text("Copy the visible table").clicked() {
            actions::copy(app, ui.ctx());
        }
    });

    ui.add_space(6.0);
    draw_card(ui, app);
}

fn draw_card(ui: &mut egui::Ui, app: &App) {
    let picked = app
        .picked
        .as_deref()
        .and_then(|t| app.selector.as_ref()?.entry(t).ok());

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_size(egui::vec2(400.0, 100.0));
        let Some(rec) = picked else {
            ui.centered_and_justified(|ui| { ui.weak("Selected bar"); });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading(rec.title.as_str());
            if let Some(url) = rec.website.as_deref() {
                ui.hyperlink_to(url, url);
            }
        });

        egui::CollapsingHeader::new("Details")
            .id_salt("picked_details")
            .show(ui, |ui| {
                egui::Grid::new("picked_grid").num_columns(2).striped(true).show(ui, |ui| {
                    for (k, v) in rec.details() {
                        ui.label(RichText::new(k).strong());
                        ui.label(v);
                        ui.end_row();
                    }
                });
            });
    });
}
