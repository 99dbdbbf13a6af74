//! Reachability check for the coordinating host of a parallel run.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use thicket_diagnostics::{catalog, Diagnostic};

/// How long to wait for each resolved address to accept a connection.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Tries to open a TCP connection to `host` (`address:port`).
///
/// Succeeds as soon as any resolved address accepts; otherwise returns the
/// unreachable-host diagnostic.
pub fn probe_host(host: &str, timeout: Duration) -> Result<(), Diagnostic> {
    log::debug!("probing parallel host {host}");
    let addrs = match host.to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            log::debug!("could not resolve {host}: {e}");
            return Err(catalog::unreachable_parallel_host(host));
        }
    };
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(_) => {
                log::debug!("parallel host {host} reachable at {addr}");
                return Ok(());
            }
            Err(e) => log::debug!("connect to {addr} failed: {e}"),
        }
    }
    Err(catalog::unreachable_parallel_host(host))
}
