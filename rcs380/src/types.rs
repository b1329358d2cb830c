// rcs380/rcs380/src/types.rs
//! Card types and session states.

use std::convert::TryFrom;
use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// Contactless card technology the reader is configured for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// ISO/IEC 14443 Type A
    #[display(fmt = "Type A")]
    TypeA,
    /// ISO/IEC 14443 Type B
    #[display(fmt = "Type B")]
    TypeB,
    /// FeliCa
    #[display(fmt = "Type F")]
    TypeF,
}

impl CardType {
    /// Every supported card type
    pub const ALL: [CardType; 3] = [CardType::TypeA, CardType::TypeB, CardType::TypeF];

    /// Single-letter selector (`'A'`, `'B'`, `'F'`)
    pub fn selector(&self) -> char {
        match self {
            CardType::TypeA => 'A',
            CardType::TypeB => 'B',
            CardType::TypeF => 'F',
        }
    }
}

impl TryFrom<char> for CardType {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(CardType::TypeA),
            'B' => Ok(CardType::TypeB),
            'F' => Ok(CardType::TypeF),
            _ => Err(Error::UnsupportedCardType(c)),
        }
    }
}

impl TryFrom<u8> for CardType {
    type Error = Error;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        CardType::try_from(b as char)
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => CardType::try_from(c),
            _ => Err(Error::InvalidSelector(s.to_string())),
        }
    }
}

/// Position of a session in the power-up -> sense-request sequence.
/// Variants are declared in transition order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionState {
    /// Nothing sent yet
    PoweredOff,
    /// Wake-up frame sent
    Initialized,
    /// Command type set
    CommandTypeSet,
    /// RF field switched
    RfSwitched,
    /// RF technology selected
    RfTypeSet,
    /// Common protocol parameters sent
    Protocol1Set,
    /// Card-type protocol parameters sent
    Protocol2Set,
    /// Sense request sent
    SenseRequestSent,
    /// Sense response captured
    ResponseAvailable,
}

impl SessionState {
    /// The state a successful transition from `self` leads to. `None` for
    /// the terminal state.
    pub fn next(&self) -> Option<SessionState> {
        use SessionState::*;
        match self {
            PoweredOff => Some(Initialized),
            Initialized => Some(CommandTypeSet),
            CommandTypeSet => Some(RfSwitched),
            RfSwitched => Some(RfTypeSet),
            RfTypeSet => Some(Protocol1Set),
            Protocol1Set => Some(Protocol2Set),
            Protocol2Set => Some(SenseRequestSent),
            SenseRequestSent => Some(ResponseAvailable),
            ResponseAvailable => None,
        }
    }

    /// True for `ResponseAvailable`
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::PoweredOff
    }
}
