use std::sync::mpsc;

use feed_logging::feed_warn;
use quakefeed_core::{update, Effect, EventRecord, LoadId, LoadPhase, LoaderState, Msg};

use crate::engine::EngineHandle;
use crate::types::EngineEvent;

/// Listener side of the coordinator, injected at construction. The
/// coordinator holds no reference to the display layer; teardown is simply
/// ceasing to consume the sink's output.
pub trait ResultSink: Send {
    /// Called exactly once per completed load cycle, empty on failure.
    fn deliver(&self, records: Vec<EventRecord>);
    /// Called when held results were discarded by a reset.
    fn cleared(&self);
}

/// Events surfaced to a channel-backed listener.
#[derive(Debug, Clone, PartialEq)]
pub enum ListenerEvent {
    Delivered(Vec<EventRecord>),
    Cleared,
}

pub struct ChannelResultSink {
    tx: mpsc::Sender<ListenerEvent>,
}

impl ChannelResultSink {
    pub fn new(tx: mpsc::Sender<ListenerEvent>) -> Self {
        Self { tx }
    }
}

impl ResultSink for ChannelResultSink {
    fn deliver(&self, records: Vec<EventRecord>) {
        let _ = self.tx.send(ListenerEvent::Delivered(records));
    }

    fn cleared(&self) {
        let _ = self.tx.send(ListenerEvent::Cleared);
    }
}

/// Seam between the coordinator and the background engine.
pub trait LoadBackend {
    fn start_load(&self, load_id: LoadId, url: String);
    fn try_recv(&self) -> Option<EngineEvent>;
}

impl LoadBackend for EngineHandle {
    fn start_load(&self, load_id: LoadId, url: String) {
        EngineHandle::start_load(self, load_id, url);
    }

    fn try_recv(&self) -> Option<EngineEvent> {
        EngineHandle::try_recv(self)
    }
}

/// Foreground-owned shell around the pure loader state machine.
///
/// Owned by exactly one lifecycle scope (one screen/session); all calls come
/// from the foreground context. The background engine only ever reports a
/// terminal result per cycle, so no locking is needed beyond the state
/// machine's single-in-flight guard.
pub struct LoadCoordinator<B: LoadBackend> {
    state: LoaderState,
    backend: B,
    sink: Box<dyn ResultSink>,
}

impl<B: LoadBackend> LoadCoordinator<B> {
    pub fn new(backend: B, sink: Box<dyn ResultSink>) -> Self {
        Self {
            state: LoaderState::new(),
            backend,
            sink,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.phase()
    }

    /// Begins one load cycle; a no-op while a cycle is already in flight.
    pub fn start(&mut self, url: impl Into<String>) {
        self.dispatch(Msg::StartRequested { url: url.into() });
    }

    /// Voids any in-flight cycle and discards held results.
    pub fn reset(&mut self) {
        self.dispatch(Msg::ResetRequested);
    }

    /// Drains completed background work into the state machine. A failed
    /// cycle is logged and degraded to an empty record list so the listener
    /// can present an empty state.
    pub fn poll(&mut self) {
        while let Some(event) = self.backend.try_recv() {
            match event {
                EngineEvent::LoadCompleted { load_id, result } => {
                    let records = match result {
                        Ok(records) => records,
                        Err(err) => {
                            feed_warn!("load {} failed: {}", load_id, err);
                            Vec::new()
                        }
                    };
                    self.dispatch(Msg::LoadFinished { load_id, records });
                }
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            match effect {
                Effect::StartLoad { load_id, url } => self.backend.start_load(load_id, url),
                Effect::Deliver { records } => self.sink.deliver(records),
                Effect::Clear => self.sink.cleared(),
            }
        }
    }
}
