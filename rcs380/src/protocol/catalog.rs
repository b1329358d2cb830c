// rcs380/rcs380/src/protocol/catalog.rs
//! Fixed command payloads sent while bringing the chip up.
//!
//! The byte values are vendor chip configuration and are kept exactly as
//! the reader expects them.

use std::convert::TryFrom;

use crate::types::CardType;
use crate::Result;

/// SetCommandType
pub const SET_COMMAND_TYPE: &[u8] = &[0x2a, 0x01];

/// SwitchRF
pub const SWITCH_RF: &[u8] = &[0x06, 0x00];

/// InSetProtocol, first parameter set (card-type independent)
pub const PROTOCOL1_PARAMS: &[u8] = &[
    0x02, 0x00, 0x18, 0x01, 0x01, 0x02, 0x01, 0x03, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06, 0x00,
    0x07, 0x08, 0x08, 0x00, 0x09, 0x00, 0x0a, 0x00, 0x0b, 0x00, 0x0c, 0x00, 0x0e, 0x04, 0x0f,
    0x00, 0x10, 0x00, 0x11, 0x00, 0x12, 0x00, 0x13, 0x06,
];

/// Card-type specific payloads for one row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    /// InSetRF
    pub rf_activation: &'static [u8],
    /// InSetProtocol, second parameter set
    pub protocol_params: &'static [u8],
    /// InCommRF sense request
    pub sense_request: &'static [u8],
}

const TYPE_F: CommandSet = CommandSet {
    rf_activation: &[0x00, 0x01, 0x01, 0x0f, 0x01],
    protocol_params: &[0x02, 0x00, 0x18],
    sense_request: &[0x04, 0x6e, 0x00, 0x06, 0x00, 0xff, 0xff, 0x01, 0x00],
};

const TYPE_A: CommandSet = CommandSet {
    rf_activation: &[0x00, 0x02, 0x03, 0x0f, 0x03],
    protocol_params: &[
        0x02, 0x00, 0x06, 0x01, 0x00, 0x02, 0x00, 0x05, 0x01, 0x07, 0x07,
    ],
    sense_request: &[0x04, 0x6e, 0x00, 0x26],
};

const TYPE_B: CommandSet = CommandSet {
    rf_activation: &[0x00, 0x03, 0x07, 0x0f, 0x07],
    protocol_params: &[
        0x02, 0x00, 0x14, 0x09, 0x01, 0x0a, 0x01, 0x0b, 0x01, 0x0c, 0x01,
    ],
    sense_request: &[0x04, 0x6e, 0x00, 0x05, 0x00, 0x10],
};

impl CardType {
    /// Catalog row for this card type
    pub fn command_set(&self) -> &'static CommandSet {
        match self {
            CardType::TypeA => &TYPE_A,
            CardType::TypeB => &TYPE_B,
            CardType::TypeF => &TYPE_F,
        }
    }
}

fn lookup(selector: char) -> Result<&'static CommandSet> {
    Ok(CardType::try_from(selector)?.command_set())
}

/// InSetRF payload for the card type named by `selector`
pub fn rf_activation_params(selector: char) -> Result<&'static [u8]> {
    lookup(selector).map(|set| set.rf_activation)
}

/// Second InSetProtocol payload for the card type named by `selector`
pub fn protocol_set_params(selector: char) -> Result<&'static [u8]> {
    lookup(selector).map(|set| set.protocol_params)
}

/// Sense request payload for the card type named by `selector`
pub fn sense_request_payload(selector: char) -> Result<&'static [u8]> {
    lookup(selector).map(|set| set.sense_request)
}
