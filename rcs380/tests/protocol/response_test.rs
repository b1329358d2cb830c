#[path = "../common/mod.rs"]
mod common;

use rcs380::CardType;
use rcs380::protocol::Response;
use rcs380::test_support::sample_sense_response;

#[test]
fn length_field_at_offset_five() {
    for ct in CardType::ALL {
        let raw = sample_sense_response(ct);
        let resp = Response::new(raw.clone());
        let len = resp.length().unwrap();
        assert_eq!(len, u16::from_le_bytes([raw[5], raw[6]]));
        assert_eq!(resp.payload().unwrap().len(), len as usize);
        assert!(resp.is_device_response());
        assert_eq!(resp.body().unwrap(), resp.payload().unwrap().to_vec());
    }
}

#[test]
fn ack_is_not_a_device_response() {
    let resp = Response::new(common::fixtures::hex_bytes("00 00 ff 00 ff 00"));
    assert!(resp.is_ack());
    assert!(!resp.is_device_response());
    assert!(resp.body().is_err());
}
