//! Console front-end: runs one feed load cycle and prints the result.
mod logging;
mod prefs;
mod probe;
mod render;

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use feed_logging::{feed_error, feed_info, feed_warn};
use quakefeed_engine::{
    ChannelResultSink, EngineHandle, FeedQuery, FetchSettings, ListenerEvent, LoadCoordinator,
};

use crate::probe::{NetworkProbe, TcpProbe};

const FEED_HOST: &str = "earthquake.usgs.gov";
const DELIVERY_DEADLINE: Duration = Duration::from_secs(30);

fn main() {
    logging::initialize(logging::LogDestination::Terminal);

    let prefs = prefs::from_env();
    feed_info!(
        "loading feed (orderby={}, minmag={})",
        prefs.order_by,
        prefs.min_magnitude
    );

    // Connectivity is inspected before the coordinator is activated.
    let probe = TcpProbe::new(FEED_HOST, 443);
    if !probe.is_online() {
        feed_warn!("no network path to {}; skipping load", FEED_HOST);
        println!("No internet connection.");
        return;
    }

    let url = match FeedQuery::new(&prefs.order_by, &prefs.min_magnitude).build() {
        Ok(url) => url,
        Err(err) => {
            feed_error!("could not build feed url: {}", err);
            println!("No earthquakes found.");
            return;
        }
    };

    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(FetchSettings::default());
    let mut coordinator = LoadCoordinator::new(engine, Box::new(ChannelResultSink::new(tx)));
    coordinator.start(url);

    let deadline = Instant::now() + DELIVERY_DEADLINE;
    loop {
        coordinator.poll();
        match rx.try_recv() {
            Ok(ListenerEvent::Delivered(records)) => {
                render::print_records(&records);
                break;
            }
            Ok(ListenerEvent::Cleared) | Err(_) => {}
        }
        if Instant::now() > deadline {
            feed_error!("feed delivery timed out");
            println!("No earthquakes found.");
            break;
        }
        thread::sleep(Duration::from_millis(20));
    }
}
