// src/gui/components/tag_panel.rs
//
// Checkbox grid of every tag in the dataset. Any change re-runs the filter.

use eframe::egui;

use crate::{config::consts::TAG_GRID_COLS, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(sel) = &app.selector else {
        ui.weak("No dataset loaded");
        return;
    };
    let tags: Vec<String> = sel.tags().to_vec();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.strong("Type");
        if ui.small_button("None").clicked() && !app.state.gui.selected_tags.is_empty() {
            app.state.gui.selected_tags.clear();
            changed = true;
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("tag_grid_scroll")
        .max_height(140.0)
        .show(ui, |ui| {
            egui::Grid::new("tag_grid")
                .num_columns(TAG_GRID_COLS)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for (i, tag) in tags.iter().enumerate() {
                        let mut on = app.state.gui.selected_tags.contains(tag);
                        if ui.checkbox(&mut on, tag.as_str()).changed() {
                            if on {
                                app.state.gui.selected_tags.push(tag.clone());
                            } else {
                                app.state.gui.selected_tags.retain(|t| t != tag);
                            }
                            changed = true;
                        }
                        if (i + 1) % TAG_GRID_COLS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    if changed {
        logf!("UI: tags → {:?}", app.state.gui.selected_tags);
        actions::apply_filters(app);
        app.persist();
    }
}
