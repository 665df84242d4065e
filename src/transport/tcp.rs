//! # Raw TCP Transport
//!
//! Sends bytes straight to a network print server's raw socket (JetDirect,
//! port 9100). There is no protocol on top: the printer interprets the
//! stream as ESC/P directly.
//!
//! ## Copies
//!
//! Each copy is sent over its own connection, one after another, so the
//! print server sees N separate jobs.
//!
//! ## Chunked Writes
//!
//! Data is written in 8 KiB chunks with a debug event per chunk, so a stall
//! on a slow print server shows up in the logs at the byte where it happened.

use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{DotprintError, Result};
use crate::printer::PrinterConfig;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 8192;

/// Default connect and write timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// # Raw TCP Printer Transport
///
/// ## Example
///
/// ```no_run
/// use dotprint::transport::TcpTransport;
/// use dotprint::protocol::commands;
///
/// let transport = TcpTransport::new("192.168.1.50", 9100);
/// transport.send(&commands::form_feed(), 1)?;
/// # Ok::<(), dotprint::DotprintError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TcpTransport {
    host: String,
    port: u16,
    timeout: Duration,
    chunk_size: usize,
}

impl TcpTransport {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: DEFAULT_TIMEOUT,
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Transport for `host` on the configured printer's raw port.
    pub fn for_printer(host: impl Into<String>, config: &PrinterConfig) -> Self {
        Self::new(host, config.raw_port)
    }

    /// Set the connect and write timeout. Default is 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the chunk size for large writes. Default is 8192 bytes.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn connect(&self) -> Result<TcpStream> {
        let addr = self.addr();
        let candidates: Vec<SocketAddr> = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| DotprintError::Transport(format!("Cannot resolve {}: {}", addr, e)))?
            .collect();

        let mut last_err = None;
        for candidate in &candidates {
            match TcpStream::connect_timeout(candidate, self.timeout) {
                Ok(stream) => {
                    stream.set_write_timeout(Some(self.timeout))?;
                    return Ok(stream);
                }
                Err(e) => last_err = Some(e),
            }
        }

        Err(DotprintError::Transport(match last_err {
            Some(e) => format!("Failed to connect to {}: {}", addr, e),
            None => format!("No addresses found for {}", addr),
        }))
    }

    /// Send `data` once over a fresh connection.
    pub fn write_all(&self, data: &[u8]) -> Result<()> {
        let addr = self.addr();
        let mut stream = self.connect()?;

        let mut sent = 0;
        for chunk in data.chunks(self.chunk_size) {
            stream.write_all(chunk).map_err(|e| {
                DotprintError::Transport(format!("Send to {} failed at byte {}: {}", addr, sent, e))
            })?;
            sent += chunk.len();
            debug!(sent, total = data.len(), "raw TCP progress");
        }

        stream
            .flush()
            .map_err(|e| DotprintError::Transport(format!("Flush failed: {}", e)))?;
        stream
            .shutdown(std::net::Shutdown::Write)
            .map_err(|e| DotprintError::Transport(format!("Shutdown failed: {}", e)))?;
        Ok(())
    }

    /// Send `copies` copies of `data`, sequentially.
    pub fn send(&self, data: &[u8], copies: u32) -> Result<()> {
        for copy in 1..=copies {
            info!(addr = %self.addr(), copy, copies, bytes = data.len(), "sending job");
            self.write_all(data)?;
        }
        info!(addr = %self.addr(), copies, "job delivered");
        Ok(())
    }
}
