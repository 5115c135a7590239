#[path = "../common/mod.rs"]
mod common;

use suica::{Error, StatusCode};

#[test]
fn status_error_surfaces_after_good_records() {
    // Two good blocks, then "Access is not allowed" on the third read.
    let frames = vec![
        common::helpers::polling_frame(),
        common::helpers::read_response_frame(&common::helpers::history_block(
            25, 2023, 11, 2, 2000, 1,
        )),
        common::helpers::read_response_frame(&common::helpers::history_block(
            22, 2024, 3, 15, 1520, 2,
        )),
        common::helpers::read_status_frame(0xA5, 0x00),
    ];

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let mut history = session.history();

    assert_eq!(history.next().unwrap().unwrap().serial(), 1);
    assert_eq!(history.next().unwrap().unwrap().serial(), 2);

    match history.next() {
        Some(Err(Error::Status(status))) => {
            assert_eq!(status, StatusCode::new(0xA5, 0x00));
        }
        other => panic!("expected Status error, got {:?}", other),
    }

    // The iterator is done after a surfaced error.
    assert!(history.next().is_none());
}

#[test]
fn transport_failure_surfaces_and_stops_iteration() {
    // One good block, then the transport queue runs dry (card removed).
    let frames = vec![
        common::helpers::polling_frame(),
        common::helpers::read_response_frame(&common::helpers::history_block(
            22, 2024, 3, 15, 1520, 7,
        )),
    ];

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let mut history = session.history();
    assert!(history.next().unwrap().is_ok());
    assert!(matches!(history.next(), Some(Err(Error::Timeout))));
    assert!(history.next().is_none());
}

#[test]
fn decode_failure_halts_the_stream() {
    // Second block has a zero month: not a calendar date.
    let mut bad = common::helpers::history_block(22, 2024, 3, 15, 1520, 2);
    bad[4] = 0x30;
    bad[5] = 0x0f; // year offset 24, month 0, day 15

    let frames = vec![
        common::helpers::polling_frame(),
        common::helpers::read_response_frame(&common::helpers::history_block(
            25, 2023, 11, 2, 2000, 1,
        )),
        common::helpers::read_response_frame(&bad),
        // A valid block afterwards must never be reached.
        common::helpers::read_response_frame(&common::helpers::history_block(
            200, 2024, 3, 16, 1400, 3,
        )),
    ];

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let mut history = session.history();
    assert!(history.next().unwrap().is_ok());
    assert!(matches!(
        history.next(),
        Some(Err(Error::InvalidDate { month: 0, .. }))
    ));
    assert!(history.next().is_none());
}

#[test]
fn collect_returns_first_error() {
    let frames = vec![
        common::helpers::polling_frame(),
        common::helpers::read_response_frame(&common::helpers::history_block(
            22, 2024, 3, 15, 1520, 1,
        )),
        common::helpers::read_status_frame(0xFF, 0x70),
    ];

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    match session.read_transactions() {
        Err(Error::Status(status)) => {
            assert_eq!((status.s1(), status.s2()), (0xFF, 0x70));
            assert!(status.describe().contains("Memory error"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}
