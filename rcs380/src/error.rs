// rcs380/rcs380/src/error.rs
//! Crate-wide error type.

use thiserror::Error;

use crate::types::SessionState;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No reader with the expected VID/PID on the bus
    #[error("device not found")]
    DeviceNotFound,

    /// Card type selector outside A/B/F
    #[error("unsupported card type: {0:?}")]
    UnsupportedCardType(char),

    /// Selector string that is not a single character
    #[error("invalid card type selector: {0:?}")]
    InvalidSelector(String),

    // USB 実装は optional dependency (usb feature) の時だけ有効
    #[cfg(feature = "usb")]
    /// Error from libusb
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// Transport failure other than libusb
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport accepted fewer bytes than the frame
    #[error("short write: expected {expected} bytes, wrote {actual}")]
    ShortWrite {
        /// frame length
        expected: usize,
        /// bytes accepted
        actual: usize,
    },

    /// No data within the transfer timeout
    #[error("operation timed out")]
    Timeout,

    /// Transition called from a state other than its predecessor
    #[error("out of order transition: session must be {expected}, but is {actual}")]
    OutOfOrder {
        /// state the transition starts from
        expected: SessionState,
        /// state the session is in
        actual: SessionState,
    },

    /// A previous transition failed; the session cannot continue
    #[error("session failed in state {state}; start a new session")]
    SessionFailed {
        /// last state reached before the failure
        state: SessionState,
    },

    /// Frame shorter than its declared length, or body too long to encode
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// required length
        expected: usize,
        /// length found
        actual: usize,
    },

    /// LCS or DCS does not match
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// computed checksum
        expected: u8,
        /// checksum in the frame
        actual: u8,
    },

    /// Malformed header or postamble
    #[error("frame format error: {0}")]
    FrameFormat(String),
}

impl Error {
    /// True for failures raised by the transport layer (as opposed to
    /// sequencing, catalog or decoding failures).
    pub fn is_transport(&self) -> bool {
        match self {
            #[cfg(feature = "usb")]
            Error::Usb(_) => true,
            Error::Transport(_) | Error::ShortWrite { .. } | Error::Timeout => true,
            _ => false,
        }
    }
}

/// `Result` with the crate error type
pub type Result<T> = std::result::Result<T, Error>;
