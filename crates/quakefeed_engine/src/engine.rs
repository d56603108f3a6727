use std::sync::{mpsc, Arc};
use std::thread;

use feed_logging::feed_debug;
use quakefeed_core::{EventRecord, LoadId};

use crate::decode::decode_feed;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::types::{EngineEvent, LoadError};

enum EngineCommand {
    StartLoad { load_id: LoadId, url: String },
}

/// Handle to the background half of the pipeline: commands go in over a
/// channel, completed loads come back over another. The foreground polls
/// [`EngineHandle::try_recv`] and never blocks.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn start_load(&self, load_id: LoadId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::StartLoad {
            load_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::StartLoad { load_id, url } => {
            let result = run_cycle(fetcher, &url).await;
            let _ = event_tx.send(EngineEvent::LoadCompleted { load_id, result });
        }
    }
}

/// One load cycle: fetch, then decode, strictly in sequence.
async fn run_cycle(fetcher: &dyn Fetcher, url: &str) -> Result<Vec<EventRecord>, LoadError> {
    let body = fetcher.fetch(url).await.map_err(LoadError::Fetch)?;
    feed_debug!("fetched {} feed bytes", body.len());
    decode_feed(&body).map_err(LoadError::Decode)
}
