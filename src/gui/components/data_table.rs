// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view over `app.table`; header clicks sort,
// title clicks select the record for the pick panel.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};

const TITLE_W: f32 = 260.0;
const TYPE_W: f32 = 220.0;
const NUM_W: f32 = 70.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = &app.table;
    if table.ncols() == 0 {
        ui.weak("No data");
        return;
    }

    let mut sort_clicked: Option<usize> = None;
    let mut row_clicked: Option<usize> = None;

    // Reserve space for scroll bars instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let max_h = ui.available_height();
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(max_h);

    for ci in 0..table.ncols() {
        let w = match ci {
            0 => TITLE_W,
            4 => TYPE_W,
            _ => NUM_W,
        };
        builder = builder.column(Column::initial(w).at_least(30.0).clip(true));
    }

    let picked = app.picked.as_deref();
    let sort = app.sort;

    builder
        .header(24.0, |mut header| {
            for (ci, name) in table.headers.iter().enumerate() {
                header.col(|ui| {
                    let arrow = match sort {
                        Some(k) if k.col == ci => if k.ascending { " ⏶" } else { " ⏷" },
                        _ => "",
                    };
                    let label = egui::Label::new(RichText::new(join!(name, arrow)).strong())
                        .selectable(false)
                        .sense(Sense::click());
                    if ui.add(label).on_hover_text("Sort").clicked() {
                        sort_clicked = Some(ci);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.nrows(), |mut row| {
                let ri = row.index();
                let Some(cells) = table.rows.get(ri) else { return };

                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if ci == 0 {
                            let selected = picked == Some(cell.as_str());
                            if ui.selectable_label(selected, cell.as_str()).clicked() {
                                row_clicked = Some(ri);
                            }
                        } else if table.is_numeric(ci) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell.as_str());
                            });
                        } else {
                            ui.label(cell.as_str());
                        }
                    });
                }
            });
        });

    if let Some(ci) = sort_clicked {
        actions::resort(app, ci);
    }
    if let Some(ri) = row_clicked {
        actions::select(app, ri);
    }
}
