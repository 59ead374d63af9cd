// src/gui/actions/pick.rs
use crate::gui::app::App;

/// "Randomize Bar!": uniform pick from the current filter output.
pub fn pick_random(app: &mut App) {
    let Some(sel) = &app.selector else { return };
    match sel.pick_random(&mut app.rng) {
        Ok(rec) => {
            let title = rec.title.clone();
            app.status(format!("Picked '{}'", title));
            app.picked = Some(title);
        }
        Err(e) => {
            logd!("Pick: {}", e);
            app.picked = None;
            app.status("No bars match the current filters");
        }
    }
}

/// Row click in the table: show that record in the pick panel.
pub fn select(app: &mut App, display_row: usize) {
    let Some(&ix) = app.table.row_ix.get(display_row) else { return };
    let Some(sel) = &app.selector else { return };
    if let Some(rec) = sel.dataset().records().get(ix) {
        app.picked = Some(rec.title.clone());
    }
}
