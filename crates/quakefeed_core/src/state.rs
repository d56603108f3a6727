use crate::record::EventRecord;

/// Monotonic identifier for one load cycle. A fresh id is allocated per
/// `start`, and results carrying an older id are discarded as stale.
pub type LoadId = u64;

/// Lifecycle phase of the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No load has started, or the loader was reset.
    #[default]
    Idle,
    /// A fetch+decode cycle is in flight on the background context.
    Loading,
    /// The most recent cycle completed and its result was delivered.
    Delivered,
}

/// Pure state of the load coordinator. All transitions go through
/// [`crate::update`]; this type only holds data and the small mutators the
/// update function drives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoaderState {
    phase: LoadPhase,
    next_load_id: LoadId,
    active_load: Option<LoadId>,
    records: Vec<EventRecord>,
}

impl LoaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Records delivered by the most recent completed cycle.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Allocates a new load id and enters `Loading`.
    pub(crate) fn begin_load(&mut self) -> LoadId {
        self.next_load_id += 1;
        self.active_load = Some(self.next_load_id);
        self.phase = LoadPhase::Loading;
        self.next_load_id
    }

    /// True when `load_id` belongs to the cycle currently in flight.
    pub(crate) fn is_active(&self, load_id: LoadId) -> bool {
        self.active_load == Some(load_id)
    }

    pub(crate) fn complete(&mut self, records: Vec<EventRecord>) {
        self.records = records;
        self.active_load = None;
        self.phase = LoadPhase::Delivered;
    }

    /// Returns to `Idle`, voiding any in-flight cycle and held records.
    pub(crate) fn reset(&mut self) {
        self.phase = LoadPhase::Idle;
        self.active_load = None;
        self.records.clear();
    }
}
