// rcs380/rcs380/src/protocol/mod.rs
//! Wire protocol: checksums, framing, command payloads, responses.

pub mod catalog;
pub mod checksum;
pub mod frame;
pub mod response;

pub use catalog::{
    CommandSet, PROTOCOL1_PARAMS, SET_COMMAND_TYPE, SWITCH_RF, protocol_set_params,
    rf_activation_params, sense_request_payload,
};
pub use checksum::{checksum, dcs, lcs};
pub use frame::Frame;
pub use response::Response;
