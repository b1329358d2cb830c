// rcs380/rcs380/src/device/handle.rs
//! Device handle owning the transport.

use crate::device::session::Session;
use crate::protocol::Response;
use crate::transport::Transport;
use crate::types::CardType;
use crate::Result;

/// An opened reader. Owns the transport for its whole lifetime; sessions
/// borrow it, so only one session can talk to the chip at a time.
pub struct Device {
    transport: Box<dyn Transport>,
}

impl Device {
    /// Create a Device from an existing Transport instance (e.g. a
    /// MockTransport in tests).
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Open the first RC-S380 on the bus.
    #[cfg(feature = "usb")]
    pub fn open() -> Result<Self> {
        let transport = crate::transport::usb::UsbTransport::open()?;
        Ok(Self::new_with_transport(Box::new(transport)))
    }

    /// Start a new session in the `PoweredOff` state.
    pub fn session(&mut self, card_type: CardType) -> Session<'_> {
        Session::new(&mut *self.transport, card_type)
    }

    /// Run a complete session for `card_type` and return the sense
    /// response.
    pub fn sense(&mut self, card_type: CardType) -> Result<Response> {
        let mut session = self.session(card_type);
        let resp = session.run()?;
        Ok(resp.clone())
    }

    /// Release the device. Dropping the handle has the same effect.
    pub fn close(self) {
        drop(self.transport);
    }
}
