// src/gui/components/distance_bar.rs
use eframe::egui;

use crate::{config::consts::SLIDER_MAX_KM, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let has_reference = app.selector.as_ref().and_then(|s| s.reference()).is_some();
    let gui = &mut app.state.gui;
    let mut changed = false;

    ui.horizontal(|ui| {
        changed |= ui.checkbox(&mut gui.distance_enabled, "Max distance").changed();
        let slider = egui::Slider::new(&mut gui.distance_km, 0.0..=SLIDER_MAX_KM)
            .step_by(0.1)
            .suffix(" km");
        changed |= ui.add_enabled(gui.distance_enabled, slider).changed();
    });

    if gui.distance_enabled && !has_reference {
        ui.weak("No reference point yet; distance filter has no effect");
    }

    if changed {
        logd!("UI: distance → {:?}", gui.threshold());
        actions::apply_filters(app);
        app.persist();
    }
}
