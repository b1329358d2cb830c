#[path = "../common/mod.rs"]
mod common;

use rcs380::device::Session;
use rcs380::transport::Transport;
use rcs380::transport::mock::MockTransport;
use rcs380::{CardType, Error, SessionState};

#[test]
fn write_failure_stops_at_last_good_state() {
    // Write n fails -> the session remains in the state reached after n
    // successful writes.
    for n in 0..7 {
        let mut mock = common::seeded_mock(CardType::TypeA);
        mock.set_fail_write_at(n);
        let mut session = Session::new(&mut mock, CardType::TypeA);

        let err = session.run().unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "write {}: {:?}", n, err);

        let mut expected = SessionState::PoweredOff;
        for _ in 0..n {
            expected = expected.next().unwrap();
        }
        assert_eq!(session.state(), expected);
        assert!(session.response().is_none());
    }
}

#[test]
fn read_failure_during_response_keeps_sense_request_sent() {
    let mut mock = common::seeded_mock(CardType::TypeF);
    // drop the sense response itself
    mock.responses.pop();
    let mut session = Session::new(&mut mock, CardType::TypeF);

    assert!(matches!(session.run(), Err(Error::Timeout)));
    assert_eq!(session.state(), SessionState::SenseRequestSent);
}

#[test]
fn failed_session_is_not_resumed() {
    let mut mock = MockTransport::new();
    let mut session = Session::new(&mut mock, CardType::TypeF);
    session.power_up().unwrap();
    assert!(session.set_command_type().is_err());

    // The caller restarts with a new session from PoweredOff.
    let fresh = Session::new(&mut mock, CardType::TypeF);
    assert_eq!(fresh.state(), SessionState::PoweredOff);
}

/// Fails write number `fail_at` once, then behaves like the inner mock.
struct FailOnce {
    inner: MockTransport,
    fail_at: Option<usize>,
}

impl Transport for FailOnce {
    fn write(&mut self, data: &[u8]) -> rcs380::Result<usize> {
        if self.fail_at == Some(self.inner.written.len()) {
            self.fail_at = None;
            return Err(Error::Transport("stall".into()));
        }
        self.inner.write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> rcs380::Result<usize> {
        self.inner.read(buf)
    }
}

#[test]
fn failed_session_rejects_a_second_run() {
    let mut transport = FailOnce {
        inner: common::seeded_mock(CardType::TypeF),
        fail_at: Some(3),
    };
    let mut session = Session::new(&mut transport, CardType::TypeF);

    assert!(matches!(session.run(), Err(Error::Transport(_))));
    assert_eq!(session.state(), SessionState::RfSwitched);

    match session.run() {
        Err(Error::SessionFailed { state }) => assert_eq!(state, SessionState::RfSwitched),
        other => panic!("expected failed session, got: {:?}", other),
    }
    assert!(matches!(
        session.advance(),
        Err(Error::SessionFailed { .. })
    ));
    assert_eq!(session.state(), SessionState::RfSwitched);
    assert!(session.response().is_none());
    drop(session);

    // nothing reached the transport after the failure
    assert_eq!(transport.inner.written.len(), 3);
    assert_eq!(transport.inner.reads, 2);
}

#[test]
fn multi_character_selector_is_reported_whole() {
    match "FA".parse::<CardType>() {
        Err(Error::InvalidSelector(s)) => assert_eq!(s, "FA"),
        other => panic!("expected invalid selector, got: {:?}", other),
    }
    assert!(matches!(
        "".parse::<CardType>(),
        Err(Error::InvalidSelector(_))
    ));
}

#[test]
fn unsupported_card_type_is_not_a_transport_error() {
    let err = "C".parse::<CardType>().unwrap_err();
    assert!(matches!(err, Error::UnsupportedCardType('C')));
    assert!(!err.is_transport());
}
