//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the MockTransport response queues a full
//! session consumes so tests across the crate and tests/ directory can
//! reuse them.
#![allow(dead_code)]

use crate::constants::{ACK_FRAME, CMD_PREFIX_DEVICE, FRAME_HEADER, FRAME_POSTAMBLE};
use crate::protocol::checksum::{dcs, lcs};
use crate::transport::mock::MockTransport;
use crate::types::CardType;

/// Number of acknowledged command frames in one session (everything after
/// the power-up frame up to and including the sense request).
pub const ACKED_COMMANDS: usize = 6;

/// Build a chip -> host frame (prefix 0xD7) around `payload`.
#[doc(hidden)]
pub fn device_frame(payload: &[u8]) -> Vec<u8> {
    let mut body = vec![CMD_PREFIX_DEVICE];
    body.extend_from_slice(payload);
    let len = body.len() as u16;

    let mut out = FRAME_HEADER.to_vec();
    out.extend_from_slice(&len.to_le_bytes());
    out.push(lcs(len));
    out.extend_from_slice(&body);
    out.push(dcs(&body));
    out.push(FRAME_POSTAMBLE);
    out
}

/// A plausible InCommRF answer for `card_type`.
#[doc(hidden)]
pub fn sample_sense_response(card_type: CardType) -> Vec<u8> {
    let mut payload = vec![0x05, 0x00, 0x00, 0x00, 0x00];
    match card_type {
        // SENS_RES
        CardType::TypeA => payload.extend_from_slice(&[0x44, 0x00]),
        // ATQB header
        CardType::TypeB => payload.extend_from_slice(&[0x50, 0x01, 0x02, 0x03, 0x04]),
        // polling response: len, code, IDm
        CardType::TypeF => {
            payload.extend_from_slice(&[0x12, 0x01]);
            payload.extend_from_slice(&[0x01, 0x2e, 0x3d, 0x4c, 0x5b, 0x6a, 0x79, 0x88]);
        }
    }
    device_frame(&payload)
}

/// Every frame a successful session reads, in order: one ack per command,
/// the dropped frame, then the sense response.
#[doc(hidden)]
pub fn full_session_responses(card_type: CardType) -> Vec<Vec<u8>> {
    let mut out = vec![ACK_FRAME.to_vec(); ACKED_COMMANDS + 1];
    out.push(sample_sense_response(card_type));
    out
}

/// MockTransport pre-seeded for one full session.
#[doc(hidden)]
pub fn seeded_mock(card_type: CardType) -> MockTransport {
    let mut mock = MockTransport::new();
    for r in full_session_responses(card_type) {
        mock.push_response(r);
    }
    mock
}
