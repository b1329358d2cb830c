// rcs380/rcs380/src/transport/traits.rs
//! The `Transport` trait.

use crate::constants::DEFAULT_MAX_PACKET_SIZE;
use crate::Result;

/// Transport trait abstracts the bulk endpoints away from protocol and
/// sequencing logic.
pub trait Transport {
    /// Write raw bytes to the bulk OUT endpoint, returning the number of
    /// bytes accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read one transfer from the bulk IN endpoint into `buf`, returning the
    /// number of bytes received.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Size of a single IN transfer. Read buffers are allocated with this
    /// size.
    fn max_packet_size(&self) -> usize {
        DEFAULT_MAX_PACKET_SIZE
    }

    /// Convenience: read one transfer into a freshly allocated buffer.
    fn read_frame(&mut self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.max_packet_size()];
        let n = self.read(&mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn max_packet_size(&self) -> usize {
        (**self).max_packet_size()
    }
}
