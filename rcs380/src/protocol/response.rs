// rcs380/rcs380/src/protocol/response.rs
//! Frames read back from the chip.

use crate::constants::{BODY_OFFSET, CMD_PREFIX_DEVICE};
use crate::protocol::Frame;
use crate::Result;

/// Raw frame read back from the chip.
///
/// Only the framing is interpreted here; the card's answer inside the body
/// is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    raw: Vec<u8>,
}

impl Response {
    /// Wrap the bytes of one read
    pub fn new(raw: Vec<u8>) -> Self {
        Self { raw }
    }

    /// Raw bytes as read
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Consume into the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }

    /// Body length declared at offset 5 (u16, little-endian)
    pub fn length(&self) -> Result<u16> {
        Frame::declared_length(&self.raw)
    }

    /// Bytes following the length checksum, up to the declared length.
    /// Unlike `body`, checksums are not verified and a short read returns
    /// what is available.
    pub fn payload(&self) -> Result<&[u8]> {
        let len = self.length()? as usize;
        let start = BODY_OFFSET.min(self.raw.len());
        let end = (BODY_OFFSET + len).min(self.raw.len());
        Ok(&self.raw[start..end])
    }

    /// Verified frame body (prefix byte included)
    pub fn body(&self) -> Result<Vec<u8>> {
        Frame::decode(&self.raw)
    }

    /// True if the body carries the chip -> host prefix (0xD7)
    pub fn is_device_response(&self) -> bool {
        self.raw.get(BODY_OFFSET) == Some(&CMD_PREFIX_DEVICE)
    }

    /// True if this is the ACK frame
    pub fn is_ack(&self) -> bool {
        Frame::is_ack(&self.raw)
    }

    /// Space-separated lowercase hex
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.raw)
    }
}

impl AsRef<[u8]> for Response {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl From<Vec<u8>> for Response {
    fn from(raw: Vec<u8>) -> Self {
        Self::new(raw)
    }
}
