//! Quakefeed core: pure load-coordinator state machine and view-model helpers.
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use record::EventRecord;
pub use state::{LoadId, LoadPhase, LoaderState};
pub use update::update;
pub use view_model::{
    format_magnitude, magnitude_band, split_location, EventRowView, LocationView,
    LOCATION_SEPARATOR,
};
