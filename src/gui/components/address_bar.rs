// src/gui/components/address_bar.rs
//
// Address line. Enter (or the button) geocodes it on a worker thread.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.label("Address:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.address)
                .hint_text("Street, city")
                .desired_width(480.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        let enabled = app.selector.is_some() && !app.running();
        if ui.add_enabled(enabled, egui::Button::new("Locate")).clicked() {
            submit = true;
        }

        if let Some(p) = app.selector.as_ref().and_then(|s| s.reference()) {
            ui.weak(format!("({:.4}, {:.4})", p.lat, p.lon));
        }
    });

    if submit {
        actions::start_geocode(app);
    }
}
