use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Connectivity check performed before the coordinator is ever started.
/// The coordinator itself knows nothing about network availability.
pub trait NetworkProbe {
    fn is_online(&self) -> bool;
}

/// Probe that attempts a bounded TCP connect to the feed host.
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_millis(3_000),
        }
    }
}

impl NetworkProbe for TcpProbe {
    fn is_online(&self) -> bool {
        let addrs = match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(_) => return false,
        };
        for addr in addrs {
            if TcpStream::connect_timeout(&addr, self.timeout).is_ok() {
                return true;
            }
        }
        false
    }
}
