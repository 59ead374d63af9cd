// src/gui/actions/filters.rs
use crate::gui::{app::App, table_model::SortKey};

/// Push slider/checkbox state into the selector and rebuild the table.
pub fn apply_filters(app: &mut App) {
    let threshold = app.state.gui.threshold();
    let tags = app.state.gui.selected_tags.clone();

    let Some(sel) = app.selector.as_mut() else { return };
    sel.set_distance_threshold(threshold);
    sel.set_required_tags(tags);

    app.rebuild_view();
    let shown = app.table.nrows();
    app.status(format!("{} bar(s) match", shown));
}

/// Header click: sort by `col`, flipping direction on repeat clicks.
pub fn resort(app: &mut App, col: usize) {
    let key = SortKey::toggled(app.sort, col);
    app.sort = Some(key);
    logd!("UI: sort col={} asc={}", key.col, key.ascending);
    app.rebuild_view();
}
