// tests/table_view.rs
use barselector::bars::{Dataset, GeoPoint, Record, projection};
use barselector::gui::table_model::{SortKey, TableData};
use barselector::strings;

fn bars() -> Dataset {
    let mut jan = Record::new("Oude Jan", "52.0120, 4.3560").with_category("Pub, Bar");
    jan.rating = Some(4.4);
    jan.reviews = Some(812);
    jan.price = Some(String::from("€€"));
    jan.address = Some(String::from("Heilige Geestkerkhof 4"));
    let jan = jan.with_website("https://oudejan.example");

    let koffie = Record::new("Stationskoffie", "52.0060, 4.3570").with_category("Cafe");

    let mut kelder = Record::new("De Wijnkelder", "52.0095, 4.3610").with_category("Wine Bar");
    kelder.rating = Some(4.7);

    let mut spoor = Record::new("Spoorzicht", "52.0110, 4.3590");
    spoor.rating = Some(3.9);

    Dataset::from_records(vec![jan, koffie, kelder, spoor]).unwrap()
}

fn all(ds: &Dataset) -> Vec<usize> {
    (0..ds.len()).collect()
}

#[test]
fn headers_with_and_without_distance() {
    assert_eq!(projection::headers(false), strings!["title", "rating", "reviews", "price", "type"]);
    assert_eq!(
        projection::headers(true),
        strings!["title", "rating", "reviews", "price", "type", "distance"]
    );
}

#[test]
fn projection_leaves_out_contact_fields() {
    let ds = bars();
    let row = projection::row(&ds.records()[0], false);
    assert_eq!(row, strings!["Oude Jan", "4.4", "812", "€€", "Pub, Bar"]);
    assert!(!row.iter().any(|c| c.contains("oudejan.example") || c.contains("Geestkerkhof")));
}

#[test]
fn distance_column_appears_after_reference_is_set() {
    let mut ds = bars();
    let plain = TableData::build(&ds, &all(&ds), None);
    assert_eq!(plain.ncols(), 5);

    ds.compute_distances(GeoPoint::new(52.0116, 4.3593)).unwrap();
    let view = TableData::build(&ds, &all(&ds), None);
    assert_eq!(view.ncols(), 6);
    assert_eq!(view.headers[5], "distance");
    assert!(view.is_numeric(5));
    assert!(view.rows.iter().all(|r| !r[5].is_empty()));
}

#[test]
fn rating_descending_puts_missing_last() {
    let ds = bars();
    let view = TableData::build(&ds, &all(&ds), Some(SortKey { col: 1, ascending: false }));

    let titles: Vec<&str> = view.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(titles, ["De Wijnkelder", "Oude Jan", "Spoorzicht", "Stationskoffie"]);

    // display rows resolve back to the right records
    for (row, &ix) in view.rows.iter().zip(&view.row_ix) {
        assert_eq!(ds.records()[ix].title, row[0]);
    }
    assert_eq!(view.row_ix, [2, 0, 3, 1]);
}

#[test]
fn rating_ascending_still_puts_missing_last() {
    let ds = bars();
    let view = TableData::build(&ds, &all(&ds), Some(SortKey { col: 1, ascending: true }));
    let titles: Vec<&str> = view.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(titles, ["Spoorzicht", "Oude Jan", "De Wijnkelder", "Stationskoffie"]);
}

#[test]
fn header_click_toggles_direction() {
    let first = SortKey::toggled(None, 1);
    assert_eq!(first, SortKey { col: 1, ascending: true });
    let second = SortKey::toggled(Some(first), 1);
    assert_eq!(second, SortKey { col: 1, ascending: false });
    assert_eq!(SortKey::toggled(Some(second), 0), SortKey { col: 0, ascending: true });
}

#[test]
fn only_kept_rows_are_shown() {
    let ds = bars();
    let view = TableData::build(&ds, &[3, 1], Some(SortKey { col: 0, ascending: true }));
    assert_eq!(view.nrows(), 2);
    assert_eq!(view.row_ix, [3, 1]);
    assert_eq!(view.rows[0][0], "Spoorzicht");
}
