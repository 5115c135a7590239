#[path = "../common/mod.rs"]
mod common;

use suica::transaction::Transaction;
use suica::Result;

#[test]
fn scan_stops_at_cap_when_no_terminator_appears() {
    // A transport that keeps producing valid blocks and never signals
    // termination. The reader must stop on its own at the scan cap
    // instead of looping forever.
    let mut frames = vec![common::helpers::polling_frame()];
    for i in 0..200u32 {
        frames.push(common::helpers::read_response_frame(
            &common::helpers::history_block(22, 2024, 3, 15, 1520, i + 1),
        ));
    }

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let txs: Vec<Transaction> = session.history().collect::<Result<_>>().unwrap();
    assert_eq!(txs.len(), 64);
    assert_eq!(txs.last().unwrap().serial(), 64);
}

#[test]
fn terminator_just_under_cap_is_honored() {
    let mut frames = vec![common::helpers::polling_frame()];
    for i in 0..63u32 {
        frames.push(common::helpers::read_response_frame(
            &common::helpers::history_block(22, 2024, 3, 15, 1520, i + 1),
        ));
    }
    frames.push(common::helpers::read_status_frame(0x01, 0xA8));

    let mut reader = common::helpers::initialized_mock_reader(frames).unwrap();
    let mut session = common::helpers::polled_session(&mut reader).unwrap();

    let txs: Vec<Transaction> = session.history().collect::<Result<_>>().unwrap();
    assert_eq!(txs.len(), 63);
}
