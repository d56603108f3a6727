#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Owning scope asked for a fresh load of the given feed URL.
    StartRequested { url: String },
    /// Background cycle finished; `records` is empty when the cycle failed.
    LoadFinished {
        load_id: crate::LoadId,
        records: Vec<crate::EventRecord>,
    },
    /// Owning scope is tearing down or restarting; void any pending work.
    ResetRequested,
}
