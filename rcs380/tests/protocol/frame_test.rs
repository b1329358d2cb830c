#[path = "../common/mod.rs"]
mod common;

use rcs380::CardType;
use rcs380::constants::{BODY_OFFSET, FRAME_OVERHEAD};
use rcs380::protocol::catalog::{PROTOCOL1_PARAMS, SET_COMMAND_TYPE, SWITCH_RF};
use rcs380::protocol::{Frame, checksum};

#[test]
fn set_command_type_on_the_wire() {
    let frame = Frame::encode(SET_COMMAND_TYPE).unwrap();
    assert_eq!(frame, common::fixtures::set_command_type_frame());
}

#[test]
fn switch_rf_on_the_wire() {
    let frame = Frame::encode(SWITCH_RF).unwrap();
    assert_eq!(frame, common::fixtures::switch_rf_frame());
}

#[test]
fn catalog_frames_are_consistent() {
    let mut payloads: Vec<&[u8]> = vec![SET_COMMAND_TYPE, SWITCH_RF, PROTOCOL1_PARAMS];
    for ct in CardType::ALL {
        let set = ct.command_set();
        payloads.extend_from_slice(&[set.rf_activation, set.protocol_params, set.sense_request]);
    }

    for payload in payloads {
        let frame = Frame::encode(payload).unwrap();
        let len = u16::from_le_bytes([frame[5], frame[6]]) as usize;
        assert_eq!(len, payload.len() + 1);
        assert_eq!(frame.len(), FRAME_OVERHEAD + len);

        let body = &frame[BODY_OFFSET..BODY_OFFSET + len];
        assert_eq!(frame[BODY_OFFSET + len], checksum(body));
        assert_eq!(*frame.last().unwrap(), 0x00);

        assert_eq!(Frame::decode(&frame).unwrap(), body.to_vec());
    }
}

#[test]
fn encoding_twice_is_identical() {
    for ct in CardType::ALL {
        let payload = ct.command_set().sense_request;
        assert_eq!(Frame::encode(payload).unwrap(), Frame::encode(payload).unwrap());
    }
}
