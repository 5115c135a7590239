#[path = "../common/mod.rs"]
mod common;

use suica::protocol::codec::decode_response_frame;
use suica::protocol::Response;
use suica::transaction::Transaction;
use suica::types::BlockData;

#[test]
fn decode_read_response_frame_with_history_block() {
    let block = common::helpers::history_block(22, 2024, 3, 15, 1520, 2);
    let frame = common::helpers::read_response_frame(&block);

    match decode_response_frame(0x06, &frame).unwrap() {
        Response::ReadWithoutEncryption { status, blocks, .. } => {
            assert!(status.is_success());
            assert_eq!(blocks, vec![BlockData::from_bytes(block)]);

            let tx = Transaction::decode(blocks[0]).unwrap();
            assert_eq!(tx.action_name(), Some("Train"));
            assert_eq!(tx.balance(), 1520);
            assert_eq!(tx.serial(), 2);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn decode_read_response_frame_with_error_status() {
    let frame = common::helpers::read_status_frame(0x01, 0xA8);

    match decode_response_frame(0x06, &frame).unwrap() {
        Response::ReadWithoutEncryption { status, blocks, .. } => {
            assert!(status.is_terminal());
            assert!(blocks.is_empty());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn decode_polling_response_frame() {
    let frame = common::helpers::polling_frame();

    match decode_response_frame(0x00, &frame).unwrap() {
        Response::Polling {
            idm, system_code, ..
        } => {
            assert_eq!(idm, common::helpers::sample_idm());
            assert_eq!(system_code, Some(suica::types::SystemCode::SUICA));
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn decode_block_captured_from_hexdump() {
    // Block bytes as they come out of a reader trace
    let raw = hex::decode("16000000306f00000000f00500000300").unwrap();
    let block = BlockData::try_from(&raw[..]).unwrap();

    let tx = Transaction::decode(block).unwrap();
    assert_eq!(tx.action(), 22);
    assert_eq!(tx.action_name(), Some("Train"));
    assert_eq!(
        tx.date(),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
    assert_eq!(tx.balance(), 1520);
    assert_eq!(tx.serial(), 3);
    assert_eq!(tx.raw(), &block);
}

#[test]
fn decode_mismatched_response_code() {
    // A polling response where a read response was expected
    let frame = common::helpers::polling_frame();
    assert!(matches!(
        decode_response_frame(0x06, &frame),
        Err(suica::Error::UnexpectedResponse {
            expected: 0x07,
            actual: 0x01
        })
    ));
}
