use std::fmt;

use quakefeed_core::{EventRecord, LoadId};

use crate::decode::DecodeError;

/// Event emitted by the background engine, consumed from the foreground via
/// [`crate::EngineHandle::try_recv`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LoadCompleted {
        load_id: LoadId,
        result: Result<Vec<EventRecord>, LoadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request URL could not be parsed; no I/O was attempted.
    InvalidUrl,
    /// The server answered with a status other than 200.
    UnexpectedStatus(u16),
    /// Connection, DNS, timeout or other transport failure.
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::UnexpectedStatus(code) => write!(f, "unexpected http status {code}"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure of one load cycle, from either pipeline stage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(FetchError),
    #[error("decode failed: {0}")]
    Decode(DecodeError),
}
