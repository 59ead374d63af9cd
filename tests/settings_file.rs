// tests/settings_file.rs
use std::fs;
use std::path::PathBuf;

use barselector::config::{settings, state::AppState};
use barselector::strings;

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("barselector_settings_{}.cfg", name));
    let _ = fs::remove_file(&p);
    p
}

#[test]
fn save_then_load() {
    let path = tmp_file("roundtrip");
    let mut state = AppState::default();
    state.options.data_path = PathBuf::from("data/other.csv");
    state.gui.address = String::from("Markt 87, Delft");
    state.gui.distance_km = 1.5;
    state.gui.distance_enabled = true;
    state.gui.show_table = true;
    state.gui.selected_tags = strings!["Pub", "Cocktail bar"];

    settings::save(&path, &state).unwrap();
    assert_eq!(settings::load(&path), state);
}

#[test]
fn missing_file_gives_defaults() {
    let path = tmp_file("missing");
    assert_eq!(settings::load(&path), AppState::default());
}

#[test]
fn hand_edited_file() {
    let path = tmp_file("hand_edited");
    fs::write(&path, "# my settings\naddress = Oude Delft 1 \ndistance_km=abc\ntags=Pub, ,Bar\n").unwrap();
    let state = settings::load(&path);
    assert_eq!(state.gui.address, "Oude Delft 1");
    assert_eq!(state.gui.distance_km, AppState::default().gui.distance_km);
    assert_eq!(state.gui.selected_tags, strings!["Pub", "Bar"]);
}
