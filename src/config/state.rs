// src/config/state.rs
use super::consts::DEFAULT_ADDRESS;
use super::options::{AppOptions, ExportFormat};

#[derive(Clone, Debug, PartialEq)]
pub struct GuiState {
    /// Text in the address line (not necessarily geocoded yet)
    pub address: String,

    /// Slider value; only applied while `distance_enabled`
    pub distance_km: f64,
    pub distance_enabled: bool,

    /// Checked tags, in the order they were ticked
    pub selected_tags: Vec<String>,

    /// "Show options" toggles the results table
    pub show_table: bool,

    pub copy_format: ExportFormat,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            address: s!(DEFAULT_ADDRESS),
            distance_km: 5.0,
            distance_enabled: false,
            selected_tags: Vec::new(),
            show_table: false,
            copy_format: ExportFormat::Tsv,
            window_w: 1400,
            window_h: 600,
        }
    }
}

impl GuiState {
    /// Threshold to hand to the filter engine.
    pub fn threshold(&self) -> Option<f64> {
        self.distance_enabled.then_some(self.distance_km)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
