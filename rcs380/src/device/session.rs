// rcs380/rcs380/src/device/session.rs
//! Ordered power-up -> sense-request sequence.

use log::{debug, trace, warn};

use crate::constants::POWER_UP_FRAME;
use crate::protocol::catalog::{PROTOCOL1_PARAMS, SET_COMMAND_TYPE, SWITCH_RF};
use crate::protocol::{Frame, Response};
use crate::transport::Transport;
use crate::types::{CardType, SessionState};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// One pass of the power-up -> sense-request sequence for a single card
/// type.
///
/// Every transition checks that the session is in its predecessor state
/// before touching the transport, so steps cannot be skipped or reordered.
/// On failure the session keeps its last successful state but is poisoned:
/// the chip state is undefined, so every later transition fails with
/// `Error::SessionFailed` and the caller must start a new session.
pub struct Session<'a> {
    transport: &'a mut dyn Transport,
    card_type: CardType,
    state: SessionState,
    failed: bool,
    response: Option<Response>,
}

impl<'a> Session<'a> {
    /// Start a session in `PoweredOff` over `transport`.
    pub fn new(transport: &'a mut dyn Transport, card_type: CardType) -> Self {
        Self {
            transport,
            card_type,
            state: SessionState::PoweredOff,
            failed: false,
            response: None,
        }
    }

    /// Last state reached successfully.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True once a transition has failed after touching the transport.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Card type this session was created for.
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// The sense response, once `ResponseAvailable` has been reached.
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Consume the session and keep only the sense response.
    pub fn into_response(self) -> Option<Response> {
        self.response
    }

    /// PoweredOff -> Initialized. The chip does not answer the wake-up
    /// frame, so nothing is read.
    pub fn power_up(&mut self) -> Result<()> {
        self.expect(SessionState::PoweredOff)?;
        let written = self.write_frame(&POWER_UP_FRAME);
        self.settle(written)?;
        self.enter_next();
        Ok(())
    }

    /// Initialized -> CommandTypeSet
    pub fn set_command_type(&mut self) -> Result<()> {
        self.command(SessionState::Initialized, SET_COMMAND_TYPE)
    }

    /// CommandTypeSet -> RfSwitched
    pub fn switch_rf(&mut self) -> Result<()> {
        self.command(SessionState::CommandTypeSet, SWITCH_RF)
    }

    /// RfSwitched -> RfTypeSet
    pub fn set_rf_type(&mut self) -> Result<()> {
        let payload = self.card_type.command_set().rf_activation;
        self.command(SessionState::RfSwitched, payload)
    }

    /// RfTypeSet -> Protocol1Set
    pub fn set_protocol1(&mut self) -> Result<()> {
        self.command(SessionState::RfTypeSet, PROTOCOL1_PARAMS)
    }

    /// Protocol1Set -> Protocol2Set
    pub fn set_protocol2(&mut self) -> Result<()> {
        let payload = self.card_type.command_set().protocol_params;
        self.command(SessionState::Protocol1Set, payload)
    }

    /// Protocol2Set -> SenseRequestSent
    pub fn send_sense_request(&mut self) -> Result<()> {
        let payload = self.card_type.command_set().sense_request;
        self.command(SessionState::Protocol2Set, payload)
    }

    /// SenseRequestSent -> ResponseAvailable. Two reads follow the sense
    /// request's ack: the first is dropped, the second is the answer frame.
    pub fn read_response(&mut self) -> Result<&Response> {
        self.expect(SessionState::SenseRequestSent)?;
        let read = self.read_two();
        let raw = self.settle(read)?;
        self.enter_next();
        Ok(self.response.insert(Response::new(raw)))
    }

    /// Perform the next transition. At `ResponseAvailable` this is a no-op.
    pub fn advance(&mut self) -> Result<SessionState> {
        match self.state {
            SessionState::PoweredOff => self.power_up()?,
            SessionState::Initialized => self.set_command_type()?,
            SessionState::CommandTypeSet => self.switch_rf()?,
            SessionState::RfSwitched => self.set_rf_type()?,
            SessionState::RfTypeSet => self.set_protocol1()?,
            SessionState::Protocol1Set => self.set_protocol2()?,
            SessionState::Protocol2Set => self.send_sense_request()?,
            SessionState::SenseRequestSent => {
                self.read_response()?;
            }
            SessionState::ResponseAvailable => {}
        }
        Ok(self.state)
    }

    /// Drive the session from its current state to `ResponseAvailable` and
    /// return the sense response.
    pub fn run(&mut self) -> Result<&Response> {
        while !self.state.is_terminal() {
            self.advance()?;
        }
        self.response
            .as_ref()
            .ok_or_else(|| Error::FrameFormat("no response captured".into()))
    }

    fn expect(&self, expected: SessionState) -> Result<()> {
        if self.failed {
            return Err(Error::SessionFailed { state: self.state });
        }
        if self.state != expected {
            return Err(Error::OutOfOrder {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }

    fn enter_next(&mut self) {
        if let Some(next) = self.state.next() {
            debug!("{}: {} -> {}", self.card_type, self.state, next);
            self.state = next;
        }
    }

    /// Poison the session if `result` is an error.
    fn settle<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            debug!("{}: failed in {}: {}", self.card_type, self.state, e);
            self.failed = true;
        }
        result
    }

    fn command(&mut self, from: SessionState, payload: &[u8]) -> Result<()> {
        self.expect(from)?;
        let exchanged = self.exchange(from, payload);
        self.settle(exchanged)?;
        self.enter_next();
        Ok(())
    }

    /// encode -> write -> read one ack
    fn exchange(&mut self, from: SessionState, payload: &[u8]) -> Result<()> {
        let frame = Frame::encode(payload)?;
        self.write_frame(&frame)?;

        let ack = self.transport.read_frame()?;
        if !Frame::is_ack(&ack) {
            warn!("expected ack after {}, got {}", from, bytes_to_hex(&ack));
        }
        Ok(())
    }

    fn read_two(&mut self) -> Result<Vec<u8>> {
        let skipped = self.transport.read_frame()?;
        trace!("skipped {}", bytes_to_hex(&skipped));

        let raw = self.transport.read_frame()?;
        trace!("response {}", bytes_to_hex(&raw));
        Ok(raw)
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        trace!("write {}", bytes_to_hex(frame));
        let n = self.transport.write(frame)?;
        if n != frame.len() {
            return Err(Error::ShortWrite {
                expected: frame.len(),
                actual: n,
            });
        }
        Ok(())
    }
}
