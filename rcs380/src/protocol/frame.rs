// rcs380/rcs380/src/protocol/frame.rs
//! Frame encoder and decoder.

use crate::constants::{
    ACK_FRAME, BODY_OFFSET, CMD_PREFIX_HOST, FRAME_HEADER, FRAME_OVERHEAD, FRAME_POSTAMBLE,
    LENGTH_OFFSET,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// RC-S380 frame helper. Provides encode/decode of the wire frame
/// Format: [Header(5)] [Len(2, LE)] [LCS(1)] [Body(n)] [DCS(1)] [Postamble(1)]
/// Header: 0x00 0x00 0xFF 0xFF 0xFF
/// Body: 0xD6 followed by the command payload
pub struct Frame;

impl Frame {
    /// Encode a command payload into a full wire frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        let body_len = payload.len() + 1;
        if body_len > u16::MAX as usize {
            return Err(Error::InvalidLength {
                expected: u16::MAX as usize,
                actual: body_len,
            });
        }

        let len = body_len as u16;
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + body_len);
        out.extend_from_slice(&FRAME_HEADER);
        out.extend_from_slice(&len.to_le_bytes());
        out.push(lcs(len));
        out.push(CMD_PREFIX_HOST);
        out.extend_from_slice(payload);
        let sum = dcs(&out[BODY_OFFSET..]);
        out.push(sum);
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode a full wire frame and return its body (prefix byte included)
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < FRAME_OVERHEAD {
            return Err(Error::InvalidLength {
                expected: FRAME_OVERHEAD,
                actual: frame.len(),
            });
        }

        if frame[..FRAME_HEADER.len()] != FRAME_HEADER {
            return Err(Error::FrameFormat("invalid header".into()));
        }

        let len = Self::declared_length(frame)?;
        let lcs_actual = frame[LENGTH_OFFSET + 2];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        // Bulk reads may be padded past the postamble
        let required_len = FRAME_OVERHEAD + len as usize;
        if frame.len() < required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let body_end = BODY_OFFSET + len as usize;
        let body = &frame[BODY_OFFSET..body_end];

        let dcs_actual = frame[body_end];
        let dcs_expected = dcs(body);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[body_end + 1] != FRAME_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(body.to_vec())
    }

    /// Read the little-endian body length at offset 5
    pub fn declared_length(frame: &[u8]) -> Result<u16> {
        match frame.get(LENGTH_OFFSET..LENGTH_OFFSET + 2) {
            Some(b) => Ok(u16::from_le_bytes([b[0], b[1]])),
            None => Err(Error::InvalidLength {
                expected: LENGTH_OFFSET + 2,
                actual: frame.len(),
            }),
        }
    }

    /// True if `bytes` is the chip's ACK frame
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == ACK_FRAME
    }
}
