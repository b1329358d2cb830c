#[path = "../common/mod.rs"]
mod common;

use rcs380::device::{Device, Session};
use rcs380::transport::mock::MockTransport;
use rcs380::{CardType, Error, SessionState};

#[test]
fn every_card_type_writes_the_defined_sequence() {
    for ct in CardType::ALL {
        let mut mock = common::seeded_mock(ct);
        {
            let mut session = Session::new(&mut mock, ct);
            session.run().unwrap();
        }
        assert_eq!(mock.written, common::fixtures::expected_session_writes(ct));
        assert!(mock.responses.is_empty());
    }
}

#[test]
fn step_by_step_matches_run() {
    let mut mock = common::seeded_mock(CardType::TypeB);
    let mut session = Session::new(&mut mock, CardType::TypeB);

    session.power_up().unwrap();
    assert_eq!(session.state(), SessionState::Initialized);
    session.set_command_type().unwrap();
    assert_eq!(session.state(), SessionState::CommandTypeSet);
    session.switch_rf().unwrap();
    assert_eq!(session.state(), SessionState::RfSwitched);
    session.set_rf_type().unwrap();
    assert_eq!(session.state(), SessionState::RfTypeSet);
    session.set_protocol1().unwrap();
    assert_eq!(session.state(), SessionState::Protocol1Set);
    session.set_protocol2().unwrap();
    assert_eq!(session.state(), SessionState::Protocol2Set);
    session.send_sense_request().unwrap();
    assert_eq!(session.state(), SessionState::SenseRequestSent);

    let len = session.read_response().unwrap().length().unwrap();
    assert_eq!(session.state(), SessionState::ResponseAvailable);
    assert!(len > 0);
}

#[test]
fn no_transition_may_be_skipped() {
    // Try every named transition from every reachable state; only the one
    // matching the current state may succeed.
    type Step = fn(&mut Session<'_>) -> rcs380::Result<()>;
    let steps: [(SessionState, Step); 8] = [
        (SessionState::PoweredOff, |s| s.power_up()),
        (SessionState::Initialized, |s| s.set_command_type()),
        (SessionState::CommandTypeSet, |s| s.switch_rf()),
        (SessionState::RfSwitched, |s| s.set_rf_type()),
        (SessionState::RfTypeSet, |s| s.set_protocol1()),
        (SessionState::Protocol1Set, |s| s.set_protocol2()),
        (SessionState::Protocol2Set, |s| s.send_sense_request()),
        (SessionState::SenseRequestSent, |s| s.read_response().map(|_| ())),
    ];

    let mut mock = common::seeded_mock(CardType::TypeF);
    let mut session = Session::new(&mut mock, CardType::TypeF);

    for (i, (from, _)) in steps.iter().enumerate() {
        assert_eq!(session.state(), *from);
        for (j, (other_from, step)) in steps.iter().enumerate() {
            if i == j {
                continue;
            }
            match step(&mut session) {
                Err(Error::OutOfOrder { expected, actual }) => {
                    assert_eq!(expected, *other_from);
                    assert_eq!(actual, *from);
                }
                other => panic!("step {} from {:?} should be rejected, got {:?}", j, from, other),
            }
        }
        (steps[i].1)(&mut session).unwrap();
    }
    assert_eq!(session.state(), SessionState::ResponseAvailable);
}

#[test]
fn device_runs_independent_sessions() {
    let mut mock = MockTransport::new();
    for ct in [CardType::TypeF, CardType::TypeA] {
        for r in common::full_session_responses(ct) {
            mock.push_response(r);
        }
    }
    let mut dev = Device::new_with_transport(Box::new(mock));

    let f = dev.sense(CardType::TypeF).unwrap();
    let a = dev.sense(CardType::TypeA).unwrap();
    assert_ne!(f, a);
    assert!(f.is_device_response());
    assert!(a.is_device_response());
}
