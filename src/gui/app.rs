// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::mpsc::Receiver,
};

use eframe::egui;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    bars::{BarSelector, GeoPoint},
    config::{consts::SETTINGS_FILE, settings, state::AppState},
    error::GeocodeError,
};

use super::{
    actions,
    table_model::{SortKey, TableData},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings_path = PathBuf::from(SETTINGS_FILE);
    let state = settings::load(&settings_path);
    eframe::run_native(
        "BarSelector",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, settings_path)))),
    )?;
    Ok(())
}

/// Reply from the geocoding worker.
pub struct GeocodeReply {
    pub address: String,
    pub result: Result<GeoPoint, GeocodeError>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings_path: PathBuf,

    // engine; None if the dataset failed to load
    pub selector: Option<BarSelector>,

    // current table view
    pub table: TableData,
    pub sort: Option<SortKey>,

    // "Randomize" result or clicked row (title)
    pub picked: Option<String>,

    // status line
    pub status: String,

    // in-flight geocode; `requeued` reruns it on the current address when done
    pub pending: Option<Receiver<GeocodeReply>>,
    pub requeued: bool,

    pub rng: StdRng,
}

impl App {
    pub fn new(state: AppState, settings_path: PathBuf) -> Self {
        let selector = match BarSelector::from_options(&state.options) {
            Ok(sel) => Some(sel),
            Err(e) => {
                loge!("Init: {}", e);
                let mut app = Self::with_selector(state, settings_path, None);
                app.status(format!("Error: {e}"));
                return app;
            }
        };
        Self::with_selector(state, settings_path, selector)
    }

    /// Build around an already constructed engine and kick off the first lookup.
    pub fn with_selector(state: AppState, settings_path: PathBuf, selector: Option<BarSelector>) -> Self {
        let status = match &selector {
            Some(sel) => format!("Loaded {} bars", sel.dataset().len()),
            None => s!("No dataset loaded"),
        };

        let mut app = Self {
            state,
            settings_path,
            selector,
            table: TableData::default(),
            sort: None,
            picked: None,
            status,
            pending: None,
            requeued: false,
            rng: StdRng::from_entropy(),
        };

        if let Some(sel) = &app.selector {
            // Drop saved tags the dataset no longer has
            let known = sel.tags();
            app.state.gui.selected_tags.retain(|t| known.contains(t));

            actions::apply_filters(&mut app);
            actions::start_geocode(&mut app);
        }

        logf!("Init: data={}", app.state.options.data_path.display());
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.pending.is_some()
    }

    /// Rebuild the table view from the selector's current filter output.
    pub fn rebuild_view(&mut self) {
        let Some(sel) = &self.selector else {
            self.table = TableData::default();
            return;
        };
        let kept = sel.filtered_indices();
        self.table = TableData::build(sel.dataset(), &kept, self.sort);
        logd!("View: {} of {} bars", kept.len(), sel.dataset().len());
    }

    /// Best-effort write of the settings file.
    pub fn persist(&self) {
        if let Err(e) = settings::save(&self.settings_path, &self.state) {
            loge!("Settings: save failed: {}", e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running() {
            actions::poll_geocode(self);
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running() {
                    ui.spinner();
                }
                ui.label(self.status.as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::address_bar::draw(ui, self);
            ui.separator();

            super::components::tag_panel::draw(ui, self);
            ui.separator();

            ui.columns(2, |cols| {
                super::components::distance_bar::draw(&mut cols[0], self);
                super::components::pick_panel::draw(&mut cols[1], self);
            });

            if self.state.gui.show_table {
                ui.separator();
                super::components::data_table::draw(ui, self);
            }
        });
    }
}
