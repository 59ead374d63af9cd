// src/config/settings.rs
//
// Plain `key=value` settings file. Unknown keys are ignored, bad values fall
// back to defaults; a missing file is not an error.

use std::{fs, io, path::{Path, PathBuf}};

use super::state::AppState;

pub fn load(path: &Path) -> AppState {
    let mut state = AppState::default();
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Settings: {} not loaded ({})", path.display(), e);
            return state;
        }
    };
    apply(&mut state, &text);
    logf!("Settings: loaded {}", path.display());
    state
}

/// Apply `key=value` lines on top of `state`.
pub fn apply(state: &mut AppState, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let (key, val) = (key.trim(), val.trim());
        match key {
            "data_path" => state.options.data_path = PathBuf::from(val),
            "address" => state.gui.address = s!(val),
            "distance_km" => {
                if let Ok(v) = val.parse::<f64>() {
                    if v.is_finite() && v >= 0.0 { state.gui.distance_km = v; }
                }
            }
            "distance_enabled" => state.gui.distance_enabled = parse_bool(val),
            "show_table" => state.gui.show_table = parse_bool(val),
            "tags" => {
                state.gui.selected_tags = val
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect();
            }
            "user_agent" => state.options.geocoder.user_agent = s!(val),
            "nominatim_url" => state.options.geocoder.base_url = s!(val),
            _ => logd!("Settings: unknown key '{}'", key),
        }
    }
}

pub fn render(state: &AppState) -> String {
    let mut s = String::new();
    s.push_str(&format!("data_path={}\n", state.options.data_path.display()));
    s.push_str(&format!("address={}\n", state.gui.address));
    s.push_str(&format!("distance_km={}\n", state.gui.distance_km));
    s.push_str(&format!("distance_enabled={}\n", if state.gui.distance_enabled {1} else {0}));
    s.push_str(&format!("show_table={}\n", if state.gui.show_table {1} else {0}));
    if !state.gui.selected_tags.is_empty() {
        s.push_str(&format!("tags={}\n", state.gui.selected_tags.join(",")));
    }
    s.push_str(&format!("user_agent={}\n", state.options.geocoder.user_agent));
    s.push_str(&format!("nominatim_url={}\n", state.options.geocoder.base_url));
    s
}

pub fn save(path: &Path, state: &AppState) -> io::Result<()> {
    fs::write(path, render(state))
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
