// rcs380/rcs380/src/transport/mock.rs
//! In-memory transport for tests.

use crate::constants::DEFAULT_MAX_PACKET_SIZE;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and returns
/// queued responses.
#[derive(Debug)]
pub struct MockTransport {
    /// Frames written so far, in order
    pub written: Vec<Vec<u8>>,
    /// Queued replies, returned front first
    pub responses: Vec<Vec<u8>>,
    /// Number of read calls made so far
    pub reads: usize,
    /// Testing hook: fail the write with this index (0-based)
    pub fail_write_at: Option<usize>,
    /// Testing hook: accept at most this many bytes per write
    pub write_limit: Option<usize>,
    max_packet_size: usize,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Empty mock with the default packet size
    pub fn new() -> Self {
        Self::with_max_packet_size(DEFAULT_MAX_PACKET_SIZE)
    }

    /// Empty mock reporting `max_packet_size`
    pub fn with_max_packet_size(max_packet_size: usize) -> Self {
        Self {
            written: Vec::new(),
            responses: Vec::new(),
            reads: 0,
            fail_write_at: None,
            write_limit: None,
            max_packet_size,
        }
    }

    /// Make the n-th write (0-based) fail with a transport error.
    pub fn set_fail_write_at(&mut self, n: usize) {
        self.fail_write_at = Some(n);
    }

    /// Queue a reply for a later read
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Remove and return the last written frame
    pub fn pop_written(&mut self) -> Option<Vec<u8>> {
        self.written.pop()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.fail_write_at == Some(self.written.len()) {
            return Err(Error::Transport("mock write failure".into()));
        }
        let n = self.write_limit.map_or(data.len(), |l| l.min(data.len()));
        self.written.push(data.to_vec());
        Ok(n)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.reads += 1;
        if self.responses.is_empty() {
            return Err(Error::Timeout);
        }
        let resp = self.responses.remove(0);
        // Behave like a bulk IN transfer: anything past the buffer is lost
        let n = resp.len().min(buf.len());
        buf[..n].copy_from_slice(&resp[..n]);
        Ok(n)
    }

    fn max_packet_size(&self) -> usize {
        self.max_packet_size
    }
}
