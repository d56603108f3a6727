//! Quakefeed engine: feed retrieval pipeline and load coordination.
mod coordinator;
mod decode;
mod engine;
mod fetch;
mod query;
mod types;

pub use coordinator::{
    ChannelResultSink, ListenerEvent, LoadBackend, LoadCoordinator, ResultSink,
};
pub use decode::{decode_feed, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use query::{FeedQuery, DEFAULT_LIMIT, FEED_URL};
pub use types::{EngineEvent, FailureKind, FetchError, LoadError};
