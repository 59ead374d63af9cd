// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

/// Copy the visible table (in display order) to the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.table.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: clicked, but the view is empty");
        return;
    }

    let sep = app.state.gui.copy_format.delim();
    let txt = csv::rows_to_string(Some(app.table.headers.as_slice()), &app.table.rows, sep);
    logf!("Copy: rows={}, format={:?}", app.table.nrows(), app.state.gui.copy_format);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", app.table.nrows()));
}
