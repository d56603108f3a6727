#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Hand the URL to the background engine under this load id.
    StartLoad { load_id: crate::LoadId, url: String },
    /// Invoke the registered listener with the completed cycle's records.
    Deliver { records: Vec<crate::EventRecord> },
    /// Tell the listener that held results were discarded.
    Clear,
}
