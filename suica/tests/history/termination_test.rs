#[path = "../common/mod.rs"]
mod common;

use chrono::NaiveDate;
use suica::transaction::Transaction;
use suica::Result;

#[test]
fn history_ends_at_zero_sentinel_block() {
    let blocks = common::fixtures::sample_history_blocks();
    let frames = common::fixtures::session_frames_zero_sentinel(&blocks);

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let txs: Vec<Transaction> = session.history().collect::<Result<_>>().unwrap();
    assert_eq!(txs.len(), blocks.len());
}

#[test]
fn history_ends_at_terminal_status() {
    let blocks = common::fixtures::sample_history_blocks();
    let frames = common::fixtures::session_frames_terminal_status(&blocks);

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let txs: Vec<Transaction> = session.history().collect::<Result<_>>().unwrap();
    assert_eq!(txs.len(), blocks.len());
}

#[test]
fn history_records_decode_in_block_order() {
    let blocks = common::fixtures::sample_history_blocks();
    let frames = common::fixtures::session_frames_zero_sentinel(&blocks);

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let txs = session.read_transactions().unwrap();

    assert_eq!(txs[0].action_name(), Some("New card"));
    assert_eq!(txs[0].serial(), 1);
    assert_eq!(txs[0].balance(), 2000);
    assert_eq!(txs[0].date(), NaiveDate::from_ymd_opt(2023, 11, 2).unwrap());

    assert_eq!(txs[1].action_name(), Some("Train"));
    assert_eq!(txs[1].date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

    assert_eq!(txs[2].action_name(), Some("Vending Machine"));
    assert_eq!(txs[2].serial(), 3);
}

#[test]
fn empty_history_yields_no_records_zero_sentinel() {
    let frames = common::fixtures::session_frames_zero_sentinel(&[]);

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    assert!(session.read_transactions().unwrap().is_empty());
}

#[test]
fn empty_history_yields_no_records_terminal_status() {
    let frames = common::fixtures::session_frames_terminal_status(&[]);

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    assert!(session.read_transactions().unwrap().is_empty());
}

#[test]
fn history_restarts_from_block_zero() {
    let blocks = common::fixtures::sample_history_blocks();

    // Queue two complete passes over the same history.
    let mut frames = common::fixtures::session_frames_zero_sentinel(&blocks);
    for b in &blocks {
        frames.push(common::helpers::read_response_frame(b));
    }
    frames.push(common::helpers::read_response_frame(
        &common::helpers::sentinel_block(),
    ));

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let first = session.read_transactions().unwrap();
    let second = session.read_transactions().unwrap();
    assert_eq!(first, second);
}
