// tests/geocode_queue.rs
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use barselector::bars::{BarSelector, Dataset, GeoPoint, Record};
use barselector::config::{settings, state::AppState};
use barselector::geocode::StaticGeocoder;
use barselector::gui::{actions, app::App};

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("barselector_gui_{}.cfg", name));
    let _ = fs::remove_file(&p);
    p
}

fn app(settings_path: PathBuf) -> App {
    let ds = Dataset::from_records(vec![
        Record::new("Oude Jan", "52.0120, 4.3560"),
        Record::new("Spoorzicht", "52.0110, 4.3590"),
    ])
    .unwrap();
    let geo = StaticGeocoder::new()
        .with("Markt 1, Delft", 52.0116, 4.3593)
        .with("Station Delft", 52.0067, 4.3567);

    let mut state = AppState::default();
    state.gui.address = String::from("Markt 1, Delft");
    App::with_selector(state, settings_path, Some(BarSelector::new(ds, Arc::new(geo))))
}

fn settle(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.running() {
        assert!(Instant::now() < deadline, "geocode never finished");
        actions::poll_geocode(app);
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn address_entered_during_lookup_is_looked_up_next() {
    let path = tmp_file("requeue");
    let mut app = app(path.clone());
    assert!(app.running());

    app.state.gui.address = String::from("Station Delft");
    actions::start_geocode(&mut app);
    assert!(app.requeued);
    assert!(app.status.contains("Station Delft"));

    settle(&mut app);
    assert!(!app.requeued);

    let reference = app.selector.as_ref().and_then(|s| s.reference());
    assert_eq!(reference, Some(GeoPoint::new(52.0067, 4.3567)));
    assert_eq!(settings::load(&path).gui.address, "Station Delft");
}

#[test]
fn single_lookup_persists_its_address() {
    let path = tmp_file("single");
    let mut app = app(path.clone());
    settle(&mut app);

    let reference = app.selector.as_ref().and_then(|s| s.reference());
    assert_eq!(reference, Some(GeoPoint::new(52.0116, 4.3593)));
    assert!(app.table.rows.iter().all(|r| r.len() == 6));
    assert_eq!(settings::load(&path).gui.address, "Markt 1, Delft");
}
