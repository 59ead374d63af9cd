// src/gui/actions/geocode.rs
//
// Geocoding blocks on the network, so it runs on a worker thread. The reply
// comes back over a channel polled from `App::update`; distances are then
// recomputed on the UI thread, the only place the dataset is touched.

use std::{sync::mpsc, thread};

use crate::{
    geocode,
    gui::app::{App, GeocodeReply},
};

pub fn start_geocode(app: &mut App) {
    if app.running() {
        // newest address wins; it is looked up once the current reply lands
        app.requeued = true;
        app.status(format!("Will look up '{}' next…", app.state.gui.address.trim()));
        logd!("Geocode: requeued behind the lookup in flight");
        return;
    }
    let Some(geocoder) = app.selector.as_ref().map(|s| s.geocoder()) else { return };

    let address = app.state.gui.address.trim().to_string();
    if address.is_empty() {
        app.status("Enter an address first");
        return;
    }

    let (tx, rx) = mpsc::channel::<GeocodeReply>();
    let addr = address.clone();

    thread::spawn(move || {
        let result = geocode::resolve(geocoder.as_ref(), &addr);
        let _ = tx.send(GeocodeReply { address: addr, result });
    });

    app.pending = Some(rx);
    app.status(format!("Looking up '{}'…", address));
    logf!("UI: geocode '{}'", address);
}

pub fn poll_geocode(app: &mut App) {
    let Some(rx) = &app.pending else { return };
    let reply = match rx.try_recv() {
        Ok(r) => Some(r),
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => None,
    };
    app.pending = None;

    match reply {
        Some(reply) => apply_reply(app, reply),
        None => {
            app.status("Error: geocoding worker stopped");
            loge!("Geocode: worker hung up");
        }
    }

    if std::mem::take(&mut app.requeued) {
        start_geocode(app);
    }
}

fn apply_reply(app: &mut App, reply: GeocodeReply) {
    let point = match reply.result {
        Ok(p) => p,
        Err(e) => {
            loge!("Geocode: '{}': {}", reply.address, e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let Some(sel) = app.selector.as_mut() else { return };
    if let Err(e) = sel.set_reference_point(point) {
        app.status(format!("Error: {e}"));
        return;
    }

    app.rebuild_view();
    // a queued lookup will persist the address it resolves
    if !app.requeued {
        app.persist();
    }
    let shown = app.table.nrows();
    app.status(format!(
        "Distances from '{}' ({:.5}, {:.5}), {} bar(s) match",
        reply.address, point.lat, point.lon, shown
    ));
}
